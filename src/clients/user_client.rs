//! # User Client
//!
//! Talks to the [`DirectoryActor`](crate::directory::DirectoryActor) over
//! its request channel. Cheap to clone: it only holds a sender.

use super::error::ApiError;
use super::user_api::UserApi;
use crate::directory::{DirectoryError, DirectoryRequest};
use crate::model::{Page, User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the user directory.
#[derive(Clone, Debug)]
pub struct UserClient {
    sender: mpsc::Sender<DirectoryRequest>,
}

impl UserClient {
    pub fn new(sender: mpsc::Sender<DirectoryRequest>) -> Self {
        Self { sender }
    }

    async fn request<T, F>(&self, build: F) -> Result<T, ApiError>
    where
        T: Send,
        F: FnOnce(oneshot::Sender<Result<T, DirectoryError>>) -> DirectoryRequest + Send,
    {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| DirectoryError::Closed)?;
        let result = response.await.map_err(|_| DirectoryError::Dropped)?;
        Ok(result?)
    }
}

#[async_trait]
impl UserApi for UserClient {
    #[instrument(skip(self))]
    async fn list(&self, page: u32) -> Result<Page<User>, ApiError> {
        debug!("Sending request");
        self.request(|respond_to| DirectoryRequest::List { page, respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn get(&self, id: UserId) -> Result<User, ApiError> {
        debug!("Sending request");
        self.request(|respond_to| DirectoryRequest::Get { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn create(&self, params: UserCreate) -> Result<User, ApiError> {
        debug!("Sending request");
        self.request(|respond_to| DirectoryRequest::Create { params, respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn update(&self, id: UserId, update: UserUpdate) -> Result<User, ApiError> {
        debug!("Sending request");
        self.request(|respond_to| DirectoryRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: UserId) -> Result<bool, ApiError> {
        debug!("Sending request");
        self.request(|respond_to| DirectoryRequest::Delete { id, respond_to })
            .await
    }
}
