//! # Console Views
//!
//! The screens of the console, expressed as plain state plus the operations
//! a user can perform on them. Rendering is left to whoever drives them (the
//! demo binary just logs).
//!
//! - [`list`] - paginated, sortable listing
//! - [`detail`] - one record, with delete
//! - [`create`] / [`edit`] - forms that validate before calling the API
//! - [`form`] - field, avatar and error state shared by both forms
//!
//! Operations that finish a screen (submit, delete) take the view by value.
//! On failure the view comes back inside [`Rejected`] so the user can keep
//! working with it.

pub mod create;
pub mod detail;
pub mod edit;
pub mod form;
pub mod list;

pub use create::*;
pub use detail::*;
pub use edit::*;
pub use form::*;
pub use list::*;

use crate::clients::ApiError;
use crate::model::UserId;
use crate::validation::ValidationResult;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Delay before leaving the create screen after a successful submit.
pub const CREATE_REDIRECT_DELAY: Duration = Duration::from_secs(8);
/// Delay before leaving the edit screen after a successful submit.
pub const EDIT_REDIRECT_DELAY: Duration = Duration::from_secs(7);
/// Delay before leaving the detail screen after a delete.
pub const DELETE_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// User-facing failures of a view operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("Please fix the {} highlighted field(s)", .0.len())]
    Invalid(ValidationResult),

    #[error("Could not load users: {0}")]
    List(#[source] ApiError),

    #[error("Could not load user data: {0}")]
    Load(#[source] ApiError),

    #[error("Could not create user: {0}")]
    Create(#[source] ApiError),

    #[error("Could not update user: {0}")]
    Update(#[source] ApiError),

    #[error("Could not delete user: {0}")]
    Delete(#[source] ApiError),

    #[error("Could not delete user")]
    DeleteDeclined,
}

/// A view handed back after a failed operation, with the reason.
#[derive(Debug)]
pub struct Rejected<V> {
    pub view: V,
    pub error: ViewError,
}

impl<V> Rejected<V> {
    pub fn new(view: V, error: ViewError) -> Self {
        Self { view, error }
    }

    pub fn into_view(self) -> V {
        self.view
    }
}

impl<V> fmt::Display for Rejected<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<V: fmt::Debug> std::error::Error for Rejected<V> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Where the console goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(UserId),
    Edit(UserId),
    Create,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => f.write_str("/"),
            Route::Detail(id) => write!(f, "/user/{id}"),
            Route::Edit(id) => write!(f, "/user/{id}/edit"),
            Route::Create => f.write_str("/user/create"),
        }
    }
}

/// A pending navigation. The console does not start timers itself; the
/// driver waits `after` and then shows `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub to: Route,
    pub after: Duration,
}
