//! # Directory Task
//!
//! The `DirectoryActor` owns every user record and serves
//! [`DirectoryRequest`]s one at a time. Because the task has exclusive
//! ownership of `store`, no locks are needed around it.

use super::error::DirectoryError;
use super::message::DirectoryRequest;
use crate::clients::UserClient;
use crate::model::{Page, User, UserId};
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The server half of the user directory.
///
/// Records are kept in a `BTreeMap` so listings come back ordered by id.
/// Ids are handed out from a counter that starts after the highest seeded
/// id.
pub struct DirectoryActor {
    receiver: mpsc::Receiver<DirectoryRequest>,
    store: BTreeMap<UserId, User>,
    next_id: u32,
    per_page: u32,
}

impl DirectoryActor {
    /// Creates an empty directory and the client that talks to it.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. When it is full,
    ///   client calls wait for room.
    /// * `per_page` - Records per listing page.
    pub fn new(buffer_size: usize, per_page: u32) -> (Self, UserClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
            per_page: per_page.max(1),
        };
        (actor, UserClient::new(sender))
    }

    /// Preloads records. Must be called before [`run`](Self::run).
    pub fn with_users(mut self, users: impl IntoIterator<Item = User>) -> Self {
        for user in users {
            self.next_id = self.next_id.max(user.id.0 + 1);
            self.store.insert(user.id, user);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Serves requests until every client has been dropped.
    pub async fn run(mut self) {
        info!(size = self.store.len(), "Directory started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                DirectoryRequest::List { page, respond_to } => {
                    let users: Vec<User> = self.store.values().cloned().collect();
                    let page = Page::slice(&users, page, self.per_page);
                    debug!(page = page.page, returned = page.data.len(), "List");
                    let _ = respond_to.send(Ok(page));
                }
                DirectoryRequest::Get { id, respond_to } => {
                    let result = self
                        .store
                        .get(&id)
                        .cloned()
                        .ok_or(DirectoryError::NotFound(id));
                    debug!(%id, found = result.is_ok(), "Get");
                    let _ = respond_to.send(result);
                }
                DirectoryRequest::Create { params, respond_to } => {
                    debug!(?params, "Create");
                    let id = UserId(self.next_id);
                    self.next_id += 1;

                    let user = User::from_create(id, params);
                    self.store.insert(id, user.clone());
                    info!(%id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(user));
                }
                DirectoryRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(%id, ?update, "Update");
                    if let Some(user) = self.store.get_mut(&id) {
                        user.apply(update);
                        info!(%id, "Updated");
                        let _ = respond_to.send(Ok(user.clone()));
                    } else {
                        warn!(%id, "Not found");
                        let _ = respond_to.send(Err(DirectoryError::NotFound(id)));
                    }
                }
                DirectoryRequest::Delete { id, respond_to } => {
                    debug!(%id, "Delete");
                    if self.store.remove(&id).is_some() {
                        info!(%id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(true));
                    } else {
                        warn!(%id, "Not found");
                        let _ = respond_to.send(Err(DirectoryError::NotFound(id)));
                    }
                }
            }
        }

        info!(size = self.store.len(), "Shutdown");
    }
}
