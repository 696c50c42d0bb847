//! Scripted in-memory transport for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Method;
use serde_json::Value;

use super::client::ApiClient;
use crate::core::{ApiRequest, AppError, Result, Transport};

/// Replies queued per `(method, path)`; unmatched requests fail with a 404.
#[derive(Default)]
pub(crate) struct MockTransport {
    replies: Mutex<HashMap<(Method, String), VecDeque<Result<Value>>>>,
    requests: Mutex<Vec<ApiRequest>>,
    token: Mutex<Option<String>>,
}

impl MockTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn client(self: &Arc<Self>) -> ApiClient {
        ApiClient::new(self.clone())
    }

    /// Queue a successful JSON reply.
    pub(crate) fn reply(&self, method: Method, path: &str, body: Value) {
        self.push(method, path, Ok(body));
    }

    /// Queue a failure.
    pub(crate) fn fail(&self, method: Method, path: &str, error: AppError) {
        self.push(method, path, Err(error));
    }

    /// Queue a non-2xx failure without a server message.
    pub(crate) fn fail_bare(&self, method: Method, path: &str, status: u16) {
        self.fail(
            method,
            path,
            AppError::Request {
                status: Some(status),
                message: None,
            },
        );
    }

    fn push(&self, method: Method, path: &str, reply: Result<Value>) {
        self.replies
            .lock()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let key = (request.method.clone(), request.path.clone());
        self.requests.lock().push(request);
        // Yield once so concurrent callers can observe in-flight state
        tokio::task::yield_now().await;
        self.replies
            .lock()
            .get_mut(&key)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Err(AppError::Request {
                status: Some(404),
                message: Some(format!("no scripted reply for {} {}", key.0, key.1)),
            }))
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.lock() = token;
    }

    fn token(&self) -> Option<String> {
        self.token.lock().clone()
    }
}
