//! The create-user form.

use super::form::{AvatarPreview, FormState, UserForm};
use super::{Redirect, Rejected, Route, ViewError, CREATE_REDIRECT_DELAY};
use crate::avatar::AvatarPool;
use crate::clients::UserApi;
use crate::model::{User, UserCreate, UserDraft};
use crate::validation::validate_user_form;
use tracing::{info, instrument, warn};

/// A blank form for a new user.
#[derive(Debug, Clone)]
pub struct CreateUserForm {
    state: FormState,
}

/// What the create screen shows after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    /// The record as stored by the API.
    pub user: User,
    /// Avatar to display: the local preview if one was picked.
    pub preview: Option<AvatarPreview>,
    pub selected_file_name: Option<String>,
    pub redirect: Redirect,
}

impl CreateUserForm {
    pub fn new(pool: AvatarPool) -> Self {
        Self {
            state: FormState::new(UserDraft::default(), pool),
        }
    }

    /// Validates the draft and, if it passes, creates the user.
    ///
    /// A failed validation replaces the form's errors and hands the form
    /// back without calling the API. A failed API call hands the form back
    /// with [`ViewError::Create`].
    #[instrument(skip_all)]
    pub async fn submit<A>(mut self, api: &A) -> Result<CreateOutcome, Rejected<Self>>
    where
        A: UserApi + ?Sized,
    {
        let errors = validate_user_form(self.draft());
        self.state.replace_errors(errors.clone());
        if !errors.is_valid() {
            return Err(Rejected::new(self, ViewError::Invalid(errors)));
        }

        let params = UserCreate::from(self.draft().clone());
        match api.create(params).await {
            Ok(user) => {
                info!(id = %user.id, "User created");
                let selected_file_name = self.state.selected_file_name_owned();
                Ok(CreateOutcome {
                    user,
                    preview: self.preview().cloned(),
                    selected_file_name,
                    redirect: Redirect {
                        to: Route::List,
                        after: CREATE_REDIRECT_DELAY,
                    },
                })
            }
            Err(e) => {
                warn!(error = %e, "Create failed");
                Err(Rejected::new(self, ViewError::Create(e)))
            }
        }
    }
}

impl UserForm for CreateUserForm {
    fn state(&self) -> &FormState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }
}

impl CreateOutcome {
    /// The avatar URL to show for the new user.
    ///
    /// Prefers what the user saw in the preview, falling back to the stored
    /// avatar.
    pub fn display_avatar(&self) -> &str {
        match &self.preview {
            Some(AvatarPreview::Remote(url)) => url,
            _ => &self.user.avatar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::{Call, MockUserApi};
    use crate::clients::ApiError;
    use crate::model::{UserField, UserId};
    use crate::validation::ImageFile;

    fn pool() -> AvatarPool {
        AvatarPool::new("https://reqres.in/img/faces")
    }

    fn filled() -> CreateUserForm {
        let mut form = CreateUserForm::new(pool());
        form.set_field(UserField::FirstName, "Ana");
        form.set_field(UserField::LastName, "Lopez");
        form.set_field(UserField::Email, "ana@example.com");
        form
    }

    fn stored(avatar: &str) -> User {
        User {
            id: UserId(13),
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            email: "ana@example.com".to_string(),
            avatar: avatar.to_string(),
        }
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_api() {
        let mock = MockUserApi::new();
        let mut form = CreateUserForm::new(pool());
        form.set_field(UserField::FirstName, "Al");

        let rejected = form.submit(&mock).await.unwrap_err();
        assert!(matches!(rejected.error, ViewError::Invalid(_)));
        assert_eq!(
            rejected.view.errors().get(UserField::FirstName),
            Some("First name must be at least 3 characters")
        );
        assert!(rejected.view.errors().contains(UserField::Email));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_submit_sends_stand_in_avatar() {
        let mock = MockUserApi::new();
        let mut form = filled();
        let mut sixth = |_len: usize| 5;
        assert!(form.choose_image(ImageFile::new("me.png", "image/png", 1024), &mut sixth));

        let avatar = "https://reqres.in/img/faces/6-image.jpg";
        mock.expect_create().return_ok(stored(avatar));

        let outcome = form.submit(&mock).await.unwrap();
        assert_eq!(outcome.user.id, UserId(13));
        assert_eq!(outcome.selected_file_name.as_deref(), Some("me.png"));
        assert_eq!(outcome.redirect.to, Route::List);
        assert_eq!(outcome.redirect.after, CREATE_REDIRECT_DELAY);
        assert_eq!(outcome.display_avatar(), avatar);

        match &mock.calls()[0] {
            Call::Create(params) => assert_eq!(params.avatar, avatar),
            other => panic!("unexpected call {other:?}"),
        }
        mock.verify();
    }

    #[tokio::test]
    async fn test_api_failure_returns_form() {
        let mock = MockUserApi::new();
        mock.expect_create()
            .return_err(ApiError::Unavailable("timeout".to_string()));

        let rejected = filled().submit(&mock).await.unwrap_err();
        assert_eq!(
            rejected.to_string(),
            "Could not create user: User API unavailable: timeout"
        );
        assert_eq!(rejected.view.draft().first_name, "Ana");
        assert!(rejected.view.errors().is_valid());
    }

    #[tokio::test]
    async fn test_submit_drops_stale_avatar_error() {
        let mock = MockUserApi::new();
        let mut form = filled();
        let mut any = |_len: usize| 0;
        assert!(!form.choose_image(ImageFile::new("a.txt", "text/plain", 10), &mut any));
        assert!(form.errors().contains(UserField::Avatar));

        mock.expect_create().return_ok(stored(""));
        let outcome = form.submit(&mock).await.unwrap();
        assert_eq!(outcome.preview, None);
        assert_eq!(outcome.display_avatar(), "");
    }
}
