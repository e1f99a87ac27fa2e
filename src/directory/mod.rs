//! # User Directory
//!
//! An in-process stand-in for the remote user API. It runs as a single
//! Tokio task that owns the records and answers list, get, create, update
//! and delete requests.
//!
//! ## Structure
//!
//! - [`actor`] - [`DirectoryActor`], the task that owns the store
//! - [`message`] - [`DirectoryRequest`] and the response channel type
//! - [`error`] - [`DirectoryError`]
//! - [`new()`] - Factory that builds a directory seeded with demo users
//!
//! ## Usage
//!
//! ```rust
//! use user_console::clients::UserApi;
//! use user_console::config::ConsoleConfig;
//! use user_console::directory;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = directory::new(&ConsoleConfig::default());
//!     tokio::spawn(actor.run());
//!
//!     let page = client.list(1).await.unwrap();
//!     assert_eq!(page.total, 12);
//!     assert_eq!(page.data.len(), 6);
//! }
//! ```

pub mod actor;
pub mod error;
pub mod message;

pub use actor::*;
pub use error::*;
pub use message::*;

use crate::avatar::AvatarPool;
use crate::clients::UserClient;
use crate::config::ConsoleConfig;
use crate::model::{User, UserId};

const DEMO_USERS: [(&str, &str); 12] = [
    ("George", "Bluth"),
    ("Janet", "Weaver"),
    ("Emma", "Wong"),
    ("Eve", "Holt"),
    ("Charles", "Morris"),
    ("Tracey", "Ramos"),
    ("Michael", "Lawson"),
    ("Lindsay", "Ferguson"),
    ("Tobias", "Funke"),
    ("Byron", "Fields"),
    ("George", "Edwards"),
    ("Rachel", "Howell"),
];

/// The twelve demo users the directory starts with.
///
/// User `n` gets the `n`-th stock avatar and a `first.last@reqres.in`
/// address.
pub fn demo_users(pool: &AvatarPool) -> Vec<User> {
    DEMO_USERS
        .iter()
        .zip(pool.urls())
        .enumerate()
        .map(|(i, ((first, last), avatar))| User {
            id: UserId(i as u32 + 1),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
            avatar: avatar.clone(),
        })
        .collect()
}

/// Creates a seeded directory and its client.
pub fn new(config: &ConsoleConfig) -> (DirectoryActor, UserClient) {
    let pool = AvatarPool::new(&config.avatar_base_url);
    let (actor, client) = DirectoryActor::new(config.channel_buffer, config.page_size);
    (actor.with_users(demo_users(&pool)), client)
}
