//! # Core Abstractions
//!
//! Core traits and error types shared by every layer of the client.
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`service`]**: The [`Transport`] trait and request types
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dashboard::core::Transport;
//! use dashboard::services::api::{ApiClient, HttpTransport};
//!
//! # fn example(config: &dashboard::config::ClientConfig) -> dashboard::core::Result<()> {
//! // In production: the reqwest transport
//! let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(config)?);
//! let api = ApiClient::new(transport);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{ApiRequest, FilePart, RequestBody, Transport};
