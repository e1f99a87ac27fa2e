//! # UserApi Trait
//!
//! The contract the views program against. [`UserClient`](super::UserClient)
//! implements it over the in-process directory and
//! [`MockUserApi`](super::mock::MockUserApi) implements it for tests.

use super::error::ApiError;
use crate::model::{Page, User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;

/// List, read, create, update and delete user records.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Fetch one 1-based page of users.
    async fn list(&self, page: u32) -> Result<Page<User>, ApiError>;

    /// Fetch a user by id.
    async fn get(&self, id: UserId) -> Result<User, ApiError>;

    /// Create a user and return the stored record.
    async fn create(&self, params: UserCreate) -> Result<User, ApiError>;

    /// Update a user and return the stored record.
    async fn update(&self, id: UserId, update: UserUpdate) -> Result<User, ApiError>;

    /// Delete a user. `Ok(false)` means the API declined without an error.
    async fn delete(&self, id: UserId) -> Result<bool, ApiError>;
}
