//! Validation error types.

use crate::model::UserField;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Field-level error messages for one candidate record.
///
/// A field without an entry is valid. Entries iterate in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<UserField, String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when no field carries an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: UserField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: UserField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Records `message` for `field`, replacing any earlier message.
    pub fn insert(&mut self, field: UserField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn clear(&mut self, field: UserField) -> Option<String> {
        self.errors.remove(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = UserField> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (UserField, &str)> + '_ {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Why a chosen avatar file was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ImageError {
    /// The media type does not start with `image/`.
    #[error("File must be an image")]
    NotAnImage { media_type: String },

    /// The file exceeds the upload limit of the user API.
    #[error("Image must not exceed 500KB due to API limitations")]
    TooLarge { size: u64, limit: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid());
        assert_eq!(result.len(), 0);
    }

    #[test]
    fn test_insert_replaces_and_clear_removes() {
        let mut result = ValidationResult::new();
        result.insert(UserField::Avatar, "first");
        result.insert(UserField::Avatar, "second");
        assert_eq!(result.get(UserField::Avatar), Some("second"));
        assert_eq!(result.clear(UserField::Avatar), Some("second".to_string()));
        assert!(result.is_valid());
    }

    #[test]
    fn test_iterates_in_field_order() {
        let mut result = ValidationResult::new();
        result.insert(UserField::Email, "e");
        result.insert(UserField::FirstName, "f");
        let fields: Vec<_> = result.fields().collect();
        assert_eq!(fields, vec![UserField::FirstName, UserField::Email]);
    }

    #[test]
    fn test_serializes_as_field_map() {
        let mut result = ValidationResult::new();
        result.insert(UserField::LastName, "Last name is required");
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"last_name":"Last name is required"}"#);
    }

    #[test]
    fn test_image_error_messages() {
        let err = ImageError::NotAnImage {
            media_type: "text/plain".to_string(),
        };
        assert_eq!(err.to_string(), "File must be an image");
        let err = ImageError::TooLarge {
            size: 600 * 1024,
            limit: 500 * 1024,
        };
        assert!(err.to_string().contains("500KB"));
    }
}
