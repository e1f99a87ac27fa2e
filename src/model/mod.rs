//! Pure data structures shared by the directory, the clients and the views.

pub mod page;
pub mod user;

pub use page::*;
pub use user::*;
