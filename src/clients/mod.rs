//! Clients for the user API.

pub mod error;
pub mod mock;
pub mod user_api;
pub mod user_client;

pub use error::*;
pub use user_api::*;
pub use user_client::*;
