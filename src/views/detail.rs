//! Single-user view with delete.

use super::{Redirect, Rejected, Route, ViewError, DELETE_REDIRECT_DELAY};
use crate::clients::UserApi;
use crate::model::{User, UserId};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetailView {
    user: User,
}

impl UserDetailView {
    #[instrument(skip(api))]
    pub async fn load<A>(api: &A, id: UserId) -> Result<Self, ViewError>
    where
        A: UserApi + ?Sized,
    {
        let user = api.get(id).await.map_err(ViewError::Load)?;
        Ok(Self { user })
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn edit_route(&self) -> Route {
        Route::Edit(self.user.id)
    }

    /// Deletes the user. Confirmation is the caller's job.
    ///
    /// On success the console returns to the list shortly after. When the
    /// API declines or fails, the view is handed back.
    #[instrument(skip_all)]
    pub async fn delete<A>(self, api: &A) -> Result<Redirect, Rejected<Self>>
    where
        A: UserApi + ?Sized,
    {
        let id = self.user.id;
        match api.delete(id).await {
            Ok(true) => {
                info!(%id, "User deleted");
                Ok(Redirect {
                    to: Route::List,
                    after: DELETE_REDIRECT_DELAY,
                })
            }
            Ok(false) => {
                warn!(%id, "Delete declined");
                Err(Rejected::new(self, ViewError::DeleteDeclined))
            }
            Err(e) => {
                warn!(%id, error = %e, "Delete failed");
                Err(Rejected::new(self, ViewError::Delete(e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::MockUserApi;
    use crate::clients::ApiError;

    fn eve() -> User {
        User {
            id: UserId(4),
            first_name: "Eve".to_string(),
            last_name: "Holt".to_string(),
            email: "eve.holt@reqres.in".to_string(),
            avatar: String::new(),
        }
    }

    async fn loaded(mock: &MockUserApi) -> UserDetailView {
        mock.expect_get(UserId(4)).return_ok(eve());
        UserDetailView::load(mock, UserId(4)).await.unwrap()
    }

    #[tokio::test]
    async fn test_delete_redirects_to_list() {
        let mock = MockUserApi::new();
        let view = loaded(&mock).await;
        assert_eq!(view.edit_route(), Route::Edit(UserId(4)));

        mock.expect_delete(UserId(4)).return_ok(true);
        let redirect = view.delete(&mock).await.unwrap();
        assert_eq!(redirect.to, Route::List);
        assert_eq!(redirect.after, DELETE_REDIRECT_DELAY);
        mock.verify();
    }

    #[tokio::test]
    async fn test_declined_delete_keeps_view() {
        let mock = MockUserApi::new();
        let view = loaded(&mock).await;

        mock.expect_delete(UserId(4)).return_ok(false);
        let rejected = view.delete(&mock).await.unwrap_err();
        assert_eq!(rejected.error, ViewError::DeleteDeclined);
        assert_eq!(rejected.to_string(), "Could not delete user");
        assert_eq!(rejected.view.user(), &eve());
    }

    #[tokio::test]
    async fn test_failed_delete_reports_reason() {
        let mock = MockUserApi::new();
        let view = loaded(&mock).await;

        mock.expect_delete(UserId(4))
            .return_err(ApiError::Unavailable("connection reset".to_string()));
        let rejected = view.delete(&mock).await.unwrap_err();
        assert_eq!(
            rejected.to_string(),
            "Could not delete user: User API unavailable: connection reset"
        );
    }
}
