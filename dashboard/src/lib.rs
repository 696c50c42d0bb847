//! # Dashboard Client - Library Root
//!
//! Data layer of the project management dashboard: typed clients for the
//! REST backend, state stores that mirror each resource, a keyed query cache
//! and the signed-in session. This library crate contains all modules used by
//! the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              dashboard (this crate)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  session   - user, profile, token persistence          │
//! │  stores    - per-resource state (items/current/error)  │
//! │  query     - keyed cache with staleness and retry      │
//! │  services  - ApiClient + resource endpoints            │
//! │  core      - Transport trait, AppError                 │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTPS (reqwest, bearer token)
//!          ▼
//! ┌─────────────────────────┐
//! │  Backend REST API       │
//! │  https://<domain>/...   │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **core**: `Transport` seam and the error type
//! - **config**: `ClientConfig` from environment variables
//! - **debug**: tracing subscriber setup
//! - **services::api**: one module per backend resource
//! - **stores**: resource stores with the loading/error protocol
//! - **query**: `QueryCache` and the cached hooks (profile, MEV, statistics,
//!   user comments)
//! - **session**: `SessionContext`, persistent storage, access cookie
//! - **identicon**: deterministic SVG avatars
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dashboard::config::ClientConfig;
//! use dashboard::query::QueryCache;
//! use dashboard::services::api::{ApiClient, HttpTransport};
//! use dashboard::session::{FileStorage, SessionContext};
//! use dashboard::stores::ProjectStore;
//!
//! # async fn run() -> dashboard::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let api = ApiClient::new(Arc::new(HttpTransport::new(&config)?));
//! let storage = Arc::new(FileStorage::open(&config.storage_path)?);
//! let session = SessionContext::init(api.clone(), storage, QueryCache::new());
//!
//! if session.is_authenticated() {
//!     let projects = ProjectStore::new(api);
//!     projects.fetch_projects(&Default::default()).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod debug;
pub mod identicon;
pub mod query;
pub mod services;
pub mod session;
pub mod stores;

pub use core::{AppError, Result};
pub use query::{QueryCache, QueryKey, QueryOptions};
pub use services::api::{ApiClient, HttpTransport};
pub use session::SessionContext;
