//! Avatar file checks.

use super::error::{ImageError, ValidationResult};
use crate::model::UserField;
use tracing::debug;

/// Largest avatar upload the user API accepts, in bytes.
pub const MAX_AVATAR_BYTES: u64 = 500 * 1024;

/// A file the user picked locally for their avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub media_type: String,
    pub size: u64,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size,
        }
    }
}

/// Checks a chosen file and says why it was refused.
///
/// No file is not an error.
pub fn check_image(file: Option<&ImageFile>) -> Result<(), ImageError> {
    let Some(file) = file else {
        return Ok(());
    };

    if !file.media_type.starts_with("image/") {
        return Err(ImageError::NotAnImage {
            media_type: file.media_type.clone(),
        });
    }
    if file.size > MAX_AVATAR_BYTES {
        return Err(ImageError::TooLarge {
            size: file.size,
            limit: MAX_AVATAR_BYTES,
        });
    }
    Ok(())
}

/// Checks a chosen file, recording a refusal under `avatar` in `errors`.
///
/// Returns `true` when the file may be used. Existing entries in `errors`
/// are left alone when the file passes; clearing a stale avatar error is
/// up to the caller.
pub fn validate_image(file: Option<&ImageFile>, errors: &mut ValidationResult) -> bool {
    match check_image(file) {
        Ok(()) => true,
        Err(e) => {
            debug!(error = %e, "Image rejected");
            errors.insert(UserField::Avatar, e.to_string());
            false
        }
    }
}
