//! # System Lifecycle
//!
//! Starts the directory actor, hands out its client and shuts it down.
//!
//! ```rust,no_run
//! use user_console::config::ConsoleConfig;
//! use user_console::lifecycle::ConsoleSystem;
//! use user_console::clients::UserApi;
//!
//! # async fn demo() -> Result<(), String> {
//! let system = ConsoleSystem::new(&ConsoleConfig::default());
//! let first = system.client.list(1).await.map_err(|e| e.to_string())?;
//! assert_eq!(first.total, 12);
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```
//!
//! Shutdown works the way it does for any actor here: dropping the last
//! client closes the channel, the actor's loop sees `None` and exits, and
//! [`ConsoleSystem::shutdown`] waits on its task.
//!
//! See [`tracing`] for log setup.

pub mod console_system;
pub mod tracing;

pub use console_system::*;
