//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); spans show
//! inline instead.
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per directory write and submit
//! RUST_LOG=debug cargo run    # adds requests, rejected forms and picked images
//! RUST_LOG=user_console::directory=debug cargo run
//! ```
//!
//! Fields are structured, so `Created id=13 size=13` can be filtered on
//! `id` downstream. The demo binary wraps each screen in its own span and
//! client calls nest inside it. The directory runs in its own task, so its
//! lines carry no span:
//!
//! ```text
//! INFO create_screen: Submitting new user
//! INFO Created id=13 size=13
//! INFO create_screen: User created id=13
//! ```

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
