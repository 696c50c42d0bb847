//! # Service Traits
//!
//! The transport seam. Resource clients, stores and the session context only
//! ever talk to a `dyn Transport`, so tests can script responses without a
//! server and production uses [`crate::services::api::HttpTransport`].

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use super::error::Result;

/// A file attached to a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Multipart field name (`file` or `files`).
    pub field: String,
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Request body variants understood by the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(Vec<FilePart>),
}

/// One HTTP request relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn with_files(mut self, files: Vec<FilePart>) -> Self {
        self.body = RequestBody::Multipart(files);
        self
    }
}

/// Trait for the HTTP transport.
///
/// Implementations attach the bearer token when one is set, return the
/// parsed JSON body for any 2xx response and map everything else to
/// [`crate::core::AppError`]. No retries.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the request and return the decoded JSON body.
    async fn send(&self, request: ApiRequest) -> Result<Value>;

    /// Replace the bearer token used for subsequent requests.
    fn set_token(&self, token: Option<String>);

    /// Current bearer token.
    fn token(&self) -> Option<String>;
}
