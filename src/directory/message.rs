//! # Directory Messages
//!
//! Requests sent from a [`UserClient`](crate::clients::UserClient) to the
//! [`DirectoryActor`](super::DirectoryActor). Each carries a oneshot sender
//! for the reply.

use super::error::DirectoryError;
use crate::model::{Page, User, UserCreate, UserId, UserUpdate};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the directory.
pub type Response<T> = oneshot::Sender<Result<T, DirectoryError>>;

#[derive(Debug)]
pub enum DirectoryRequest {
    List {
        page: u32,
        respond_to: Response<Page<User>>,
    },
    Get {
        id: UserId,
        respond_to: Response<User>,
    },
    Create {
        params: UserCreate,
        respond_to: Response<User>,
    },
    Update {
        id: UserId,
        update: UserUpdate,
        respond_to: Response<User>,
    },
    Delete {
        id: UserId,
        respond_to: Response<bool>,
    },
}
