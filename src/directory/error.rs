//! Errors reported by the user directory task.

use crate::model::UserId;

/// Errors that can occur between a client and the directory task.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Directory closed")]
    Closed,
    #[error("Directory dropped response channel")]
    Dropped,
    #[error("User not found: {0}")]
    NotFound(UserId),
}
