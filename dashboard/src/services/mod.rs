//! # Services Module
//!
//! External service integrations of the dashboard client.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  stores / query hooks / session context      │
//! │                  │                           │
//! │           ┌──────▼───────┐                   │
//! │           │  ApiClient   │  typed endpoints  │
//! │           └──────┬───────┘                   │
//! │           ┌──────▼───────┐                   │
//! │           │ dyn Transport│  HttpTransport    │
//! │           └──────┬───────┘                   │
//! └──────────────────┼───────────────────────────┘
//!                    │ HTTPS/JSON, Bearer token
//!                    ▼
//! ┌──────────────────────────────────────────────┐
//! │  Dashboard REST backend                      │
//! │  /auth /comments /documents /projects ...    │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Returns `Result<T, AppError>`:
//! - Non-2xx: `AppError::Request` with the status and the body's `message`, if any
//! - No response: `AppError::Network`
//! - Schema mismatch: `AppError::Decode`

pub mod api;
