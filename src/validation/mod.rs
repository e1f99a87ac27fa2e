//! # Form Validation
//!
//! Pure checks run by the create and edit forms before anything is sent to
//! the user API.
//!
//! - [`validate_user_form`] checks the text fields of a candidate record.
//! - [`validate_image`] checks a locally chosen avatar file.
//! - [`detect_changes`](crate::changes::detect_changes) lives next door and
//!   builds the edit summary.
//!
//! None of these functions keep state between calls. Error state belongs to
//! the caller and is passed in or returned as a [`ValidationResult`].

pub mod error;
pub mod form;
pub mod image;

pub use error::*;
pub use form::*;
pub use image::*;
