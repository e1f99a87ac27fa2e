//! Errors returned by [`UserApi`](super::UserApi) implementations.

use crate::directory::DirectoryError;
use crate::model::UserId;
use thiserror::Error;

/// Errors that can occur while calling the user API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The requested user does not exist.
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// The API could not be reached.
    #[error("User API unavailable: {0}")]
    Unavailable(String),

    /// The API answered but refused the request.
    #[error("Request rejected: {0}")]
    Rejected(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

impl From<DirectoryError> for ApiError {
    fn from(e: DirectoryError) -> Self {
        match e {
            DirectoryError::NotFound(id) => ApiError::NotFound(id),
            other => ApiError::Unavailable(other.to_string()),
        }
    }
}
