//! # Backend API Client Module
//!
//! HTTP client for the dashboard REST backend. Every call is a typed
//! pass-through: no validation, no caching, no retries.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs         - Module exports and documentation
//! ├── transport.rs   - HttpTransport (reqwest, bearer token, error mapping)
//! ├── client.rs      - ApiClient and the typed send_* helpers
//! ├── auth.rs        - /auth/*
//! ├── comments.rs    - /comments*
//! ├── documents.rs   - /documents*
//! ├── categories.rs  - /document-categories*
//! ├── forum.rs       - /forum-posts*
//! ├── projects.rs    - /projects*
//! ├── statistics.rs  - /statistics*
//! ├── tasks.rs       - /tasks*
//! ├── upload.rs      - /upload*
//! ├── users.rs       - /users*
//! └── mev.rs         - /mev/*
//! ```
//!
//! Resource convention: list at `/<resource>`, item at `/<resource>/:id`,
//! nested actions at `/<resource>/:id/<verb>`.

pub mod auth;
pub mod categories;
pub mod client;
pub mod comments;
pub mod documents;
pub mod forum;
pub mod mev;
pub mod projects;
pub mod statistics;
pub mod tasks;
pub mod transport;
pub mod upload;
pub mod users;

#[cfg(test)]
pub(crate) mod mock;

pub use client::ApiClient;
pub use transport::HttpTransport;
