//! The edit-user form.
//!
//! Keeps the record as loaded next to the draft so the success screen can
//! list what changed.

use super::form::{FormState, UserForm};
use super::{Redirect, Rejected, Route, ViewError, EDIT_REDIRECT_DELAY};
use crate::avatar::AvatarPool;
use crate::changes::{detect_changes, summarize, FieldChange};
use crate::clients::UserApi;
use crate::model::{User, UserDraft, UserId, UserUpdate};
use crate::validation::validate_user_form;
use tracing::{info, instrument, warn};

/// A form hydrated from an existing user.
#[derive(Debug, Clone)]
pub struct EditUserForm {
    id: UserId,
    original: UserDraft,
    state: FormState,
}

/// What the edit screen shows after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub user: User,
    pub changes: Vec<FieldChange>,
    /// One line per change, ready to display.
    pub summary: Vec<String>,
    pub redirect: Redirect,
}

impl EditUserForm {
    /// Fetches the user and fills the form with its current values.
    #[instrument(skip(api, pool))]
    pub async fn load<A>(api: &A, id: UserId, pool: AvatarPool) -> Result<Self, ViewError>
    where
        A: UserApi + ?Sized,
    {
        let user = api.get(id).await.map_err(ViewError::Load)?;
        Ok(Self::from_user(&user, pool))
    }

    pub fn from_user(user: &User, pool: AvatarPool) -> Self {
        let original = UserDraft::from(user);
        Self {
            id: user.id,
            state: FormState::new(original.clone(), pool),
            original,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    /// The record as it was loaded.
    pub fn original(&self) -> &UserDraft {
        &self.original
    }

    /// Fields that would be reported as changed if submitted now.
    pub fn pending_changes(&self) -> Vec<FieldChange> {
        detect_changes(&self.original, self.draft(), self.selected_file_name())
    }

    /// Validates the draft and, if it passes, updates the user.
    ///
    /// On success the outcome lists the changed fields against the record
    /// as loaded. Failures hand the form back, as with
    /// [`CreateUserForm::submit`](super::CreateUserForm::submit).
    #[instrument(skip_all)]
    pub async fn submit<A>(mut self, api: &A) -> Result<EditOutcome, Rejected<Self>>
    where
        A: UserApi + ?Sized,
    {
        let errors = validate_user_form(self.draft());
        self.state.replace_errors(errors.clone());
        if !errors.is_valid() {
            return Err(Rejected::new(self, ViewError::Invalid(errors)));
        }

        let update = UserUpdate::from(self.draft().clone());
        match api.update(self.id, update).await {
            Ok(user) => {
                let changes = self.pending_changes();
                let summary = summarize(&changes, self.selected_file_name());
                info!(id = %self.id, changed = changes.len(), "User updated");
                Ok(EditOutcome {
                    user,
                    changes,
                    summary,
                    redirect: Redirect {
                        to: Route::Detail(self.id),
                        after: EDIT_REDIRECT_DELAY,
                    },
                })
            }
            Err(e) => {
                warn!(id = %self.id, error = %e, "Update failed");
                Err(Rejected::new(self, ViewError::Update(e)))
            }
        }
    }
}

impl UserForm for EditUserForm {
    fn state(&self) -> &FormState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }
}
