//! Logging setup for the dashboard client.
//!
//! All modules log through `tracing`; this module only installs the
//! subscriber. Requests are correlated by the `request_id` span field that
//! the transport attaches to every call.

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::{init, LogGuard};
