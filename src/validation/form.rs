//! Text field validation for candidate user records.
//!
//! Each field is checked independently and reports at most one message:
//! the first failing rule in the chain wins.
//!
//! - Names: required, at least 3 characters after trimming, then letters
//!   (including common Spanish accented letters) and spaces only.
//! - Email: required, then a loose `something@something.something` shape.

use super::error::ValidationResult;
use crate::model::{UserDraft, UserField};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Letters and whitespace, accented vowels and `ñ` included.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$")
        .expect("NAME_REGEX is a valid regex pattern")
});

/// Loose match: rejects only values with no `@` or no dotted domain.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("EMAIL_REGEX is a valid regex pattern")
});

/// Minimum name length, counted in characters after trimming.
pub const MIN_NAME_LENGTH: usize = 3;

/// Messages for one name field.
struct NameMessages {
    required: &'static str,
    too_short: &'static str,
    invalid_chars: &'static str,
}

const FIRST_NAME: NameMessages = NameMessages {
    required: "First name is required",
    too_short: "First name must be at least 3 characters",
    invalid_chars: "First name must contain only letters and spaces",
};

const LAST_NAME: NameMessages = NameMessages {
    required: "Last name is required",
    too_short: "Last name must be at least 3 characters",
    invalid_chars: "Last name must contain only letters and spaces",
};

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is not valid";

fn check_name(value: &str, messages: &NameMessages) -> Option<&'static str> {
    let value = value.trim();

    if value.is_empty() {
        return Some(messages.required);
    }
    if value.chars().count() < MIN_NAME_LENGTH {
        return Some(messages.too_short);
    }
    if !NAME_REGEX.is_match(value) {
        return Some(messages.invalid_chars);
    }
    None
}

fn check_email(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some(EMAIL_REQUIRED);
    }
    // Matched against the untrimmed value.
    if !EMAIL_REGEX.is_match(value) {
        return Some(EMAIL_INVALID);
    }
    None
}

/// Validates the text fields of a candidate record.
///
/// The avatar is not checked here; see [`validate_image`](super::validate_image).
/// The returned result is empty when the draft may be submitted.
///
/// # Examples
///
/// ```
/// use user_console::model::{UserDraft, UserField};
/// use user_console::validation::validate_user_form;
///
/// let ok = validate_user_form(&UserDraft::new("Ana", "Lopez", "a@b.com"));
/// assert!(ok.is_valid());
///
/// let bad = validate_user_form(&UserDraft::new("Al", "Lopez", "a@b.com"));
/// assert_eq!(
///     bad.get(UserField::FirstName),
///     Some("First name must be at least 3 characters")
/// );
/// ```
pub fn validate_user_form(candidate: &UserDraft) -> ValidationResult {
    let mut result = ValidationResult::new();

    if let Some(message) = check_name(&candidate.first_name, &FIRST_NAME) {
        result.insert(UserField::FirstName, message);
    }
    if let Some(message) = check_name(&candidate.last_name, &LAST_NAME) {
        result.insert(UserField::LastName, message);
    }
    if let Some(message) = check_email(&candidate.email) {
        result.insert(UserField::Email, message);
    }

    if !result.is_valid() {
        let fields: Vec<_> = result.fields().map(UserField::as_str).collect();
        debug!(?fields, "Form rejected");
    }
    result
}
