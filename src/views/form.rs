//! Field, avatar and error state shared by the create and edit forms.

use crate::avatar::{AvatarPool, IndexSource};
use crate::model::{UserDraft, UserField};
use crate::validation::{validate_image, ImageFile, ValidationResult};
use tracing::debug;

/// What the avatar preview currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarPreview {
    /// A remote image URL.
    Remote(String),
    /// A file picked from the local machine, by name.
    LocalFile(String),
}

/// The editable state behind a user form.
#[derive(Debug, Clone)]
pub struct FormState {
    draft: UserDraft,
    errors: ValidationResult,
    preview: Option<AvatarPreview>,
    selected_file_name: Option<String>,
    pool: AvatarPool,
}

impl FormState {
    pub fn new(draft: UserDraft, pool: AvatarPool) -> Self {
        let preview =
            (!draft.avatar.is_empty()).then(|| AvatarPreview::Remote(draft.avatar.clone()));
        Self {
            draft,
            errors: ValidationResult::new(),
            preview,
            selected_file_name: None,
            pool,
        }
    }

    pub(crate) fn replace_errors(&mut self, errors: ValidationResult) {
        self.errors = errors;
    }

    pub(crate) fn selected_file_name_owned(&self) -> Option<String> {
        self.selected_file_name.clone()
    }
}

/// Operations every user form supports.
///
/// Implementors only expose their [`FormState`]; the field handling is
/// shared.
pub trait UserForm {
    fn state(&self) -> &FormState;

    fn state_mut(&mut self) -> &mut FormState;

    /// The candidate record as currently typed.
    fn draft(&self) -> &UserDraft {
        &self.state().draft
    }

    /// Field errors from the last check.
    fn errors(&self) -> &ValidationResult {
        &self.state().errors
    }

    fn preview(&self) -> Option<&AvatarPreview> {
        self.state().preview.as_ref()
    }

    /// Name of the locally picked avatar file, or `""`.
    fn selected_file_name(&self) -> &str {
        self.state().selected_file_name.as_deref().unwrap_or("")
    }

    /// Value for the avatar URL input. Empty while a local file is picked.
    fn avatar_url_input(&self) -> &str {
        let state = self.state();
        if state.selected_file_name.is_some() {
            ""
        } else {
            &state.draft.avatar
        }
    }

    /// Updates one field and clears its error.
    ///
    /// Setting [`UserField::Avatar`] behaves like [`set_avatar_url`](Self::set_avatar_url).
    fn set_field(&mut self, field: UserField, value: impl Into<String>) {
        if field == UserField::Avatar {
            self.set_avatar_url(value);
            return;
        }
        let state = self.state_mut();
        state.draft.set(field, value);
        state.errors.clear(field);
    }

    /// Uses a typed URL as the avatar, dropping any picked file.
    fn set_avatar_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        let state = self.state_mut();
        state.preview = (!url.is_empty()).then(|| AvatarPreview::Remote(url.clone()));
        state.draft.avatar = url;
        state.selected_file_name = None;
        state.errors.clear(UserField::Avatar);
    }

    /// Picks a local image for the avatar.
    ///
    /// The file is checked with [`validate_image`]. If it passes, the
    /// preview shows the file, the draft's avatar becomes a stock URL chosen
    /// by `source`, and any avatar error is cleared. Returns whether the file
    /// was accepted.
    fn choose_image(&mut self, file: ImageFile, source: &mut impl IndexSource) -> bool {
        let state = self.state_mut();
        if !validate_image(Some(&file), &mut state.errors) {
            return false;
        }

        let stand_in = state.pool.pick(source);
        debug!(file = %file.name, avatar = %stand_in, "Image accepted");
        state.preview = Some(AvatarPreview::LocalFile(file.name.clone()));
        state.selected_file_name = Some(file.name);
        state.draft.avatar = stand_in;
        state.errors.clear(UserField::Avatar);
        true
    }
}
