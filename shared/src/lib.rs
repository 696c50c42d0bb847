//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the dashboard client and the REST
//! backend. All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: The `{ success, message, data, count }` response wrapper
//!   - **[`dto::auth`]**: Login, registration and session user DTOs
//!   - **[`dto::document`]**, **[`dto::category`]**, **[`dto::project`]**,
//!     **[`dto::task`]**, **[`dto::forum`]**, **[`dto::comment`]**: workspace resources
//!   - **[`dto::statistics`]**, **[`dto::upload`]**, **[`dto::user`]**, **[`dto::mev`]**
//! - **[`utils`]**: Shared display helpers
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON with MongoDB style `_id` identifiers:
//! - Rust fields are snake_case and map to camelCase via `#[serde(rename_all = "camelCase")]`
//! - Identifiers accept both `_id` and `id` on input
//! - Optional request fields are omitted from JSON when `None`
//! - Related records may arrive either as a bare id or as a populated object,
//!   see [`dto::Reference`]
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::{ApiResponse, Document};
//!
//! let body = r#"{"success":true,"message":"ok","data":[],"count":0}"#;
//! let response: ApiResponse<Vec<Document>> = serde_json::from_str(body).unwrap();
//! assert!(response.success);
//! assert_eq!(response.count, Some(0));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
