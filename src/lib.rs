//! # User Console
//!
//! > **Validation and change tracking for a small user-management console.**
//!
//! The console lists users, shows one, creates, edits and deletes them. The
//! interesting part is what happens before and after a form is submitted:
//!
//! - [`validation`] decides whether a candidate record may be sent, field by
//!   field, and whether a picked avatar image is acceptable.
//! - [`changes`] compares an edited record with the one that was loaded and
//!   produces the "what changed" summary shown after an update.
//!
//! Both are plain functions over plain data and are usable on their own.
//!
//! ## Module Tour
//!
//! ### The Data ([`model`])
//! [`User`](model::User), the editable [`UserDraft`](model::UserDraft) and
//! the [`Page`](model::Page) a listing returns.
//!
//! ### The Directory ([`directory`])
//! An actor that owns the user records in memory and serves CRUD requests
//! over a channel. It stands in for the remote user API.
//!
//! ### The Interface ([`clients`])
//! [`UserApi`](clients::UserApi) is what the views depend on.
//! [`UserClient`](clients::UserClient) implements it over the directory and
//! [`MockUserApi`](clients::mock::MockUserApi) implements it for tests.
//!
//! ### The Screens ([`views`])
//! List, detail, create and edit, each as state plus operations. Submits
//! validate first and only call the API for a clean record.
//!
//! ### Wiring ([`config`], [`lifecycle`], [`avatar`])
//! Environment-driven settings, starting and stopping the directory, and the
//! pool of stock avatar URLs that stand in for uploaded images.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! USER_CONSOLE_PAGE_SIZE=4 RUST_LOG=debug cargo run
//! ```

pub mod avatar;
pub mod changes;
pub mod clients;
pub mod config;
pub mod directory;
pub mod lifecycle;
pub mod model;
pub mod validation;
pub mod views;
