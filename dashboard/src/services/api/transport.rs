//! # HTTP Transport
//!
//! reqwest implementation of [`Transport`].

use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::core::{ApiRequest, AppError, FilePart, RequestBody, Result, Transport};

/// HTTP transport for the dashboard backend.
///
/// Holds a pooled `reqwest::Client` and the current bearer token. Cheap to
/// share behind an `Arc`.
pub struct HttpTransport {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl HttpTransport {
    /// Create a transport for the configured base URL and timeout.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: RwLock::new(None),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[tracing::instrument(
        skip(self, request),
        fields(method = %request.method, path = %request.path, request_id = tracing::field::Empty)
    )]
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let request_id = uuid::Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());
        let start = Instant::now();

        let mut builder = self
            .client
            .request(request.method.clone(), self.url(&request.path))
            .header("X-Request-Id", &request_id);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = self.token() {
            builder = builder.bearer_auth(token);
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Multipart(files) => builder.multipart(multipart_form(files)?),
        };

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, duration_ms = start.elapsed().as_millis(), "Request network error");
            AppError::Network(e.to_string())
        })?;

        read_response(response, start.elapsed()).await
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    fn token(&self) -> Option<String> {
        self.token.read().clone()
    }
}

fn multipart_form(files: Vec<FilePart>) -> Result<Form> {
    let mut form = Form::new();
    for file in files {
        let mut part = Part::bytes(file.bytes).file_name(file.file_name);
        if let Some(mime) = file.mime_type {
            part = part
                .mime_str(&mime)
                .map_err(|e| AppError::InvalidRequest(format!("Invalid MIME type {}: {}", mime, e)))?;
        }
        form = form.part(file.field, part);
    }
    Ok(form)
}

async fn read_response(response: Response, duration: Duration) -> Result<Value> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to read response body");
        AppError::Network(e.to_string())
    })?;

    if status.is_success() {
        tracing::debug!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            bytes = bytes.len(),
            "Request succeeded"
        );
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        return serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(error = %e, "Response body is not JSON");
            AppError::Decode(e.to_string())
        });
    }

    let message = error_message(&bytes);
    tracing::warn!(
        status = status.as_u16(),
        duration_ms = duration.as_millis(),
        message = message.as_deref().unwrap_or(""),
        "Request failed"
    );
    Err(AppError::Request {
        status: Some(status.as_u16()),
        message,
    })
}

/// Human readable message from an error body: `message`, then `error`.
pub(crate) fn error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}
