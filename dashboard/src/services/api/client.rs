//! # API Client
//!
//! Typed front of the transport. Resource modules add their endpoints as
//! `impl ApiClient` blocks on top of the helpers defined here.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::{ApiRequest, AppError, FilePart, Result, Transport};

/// Client for the dashboard REST API.
///
/// Cloning is cheap; clones share the transport and therefore the token.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub fn set_token(&self, token: Option<String>) {
        self.transport.set_token(token);
    }

    pub fn token(&self) -> Option<String> {
        self.transport.token()
    }

    /// `GET path?query`
    pub async fn send_get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T> {
        let request = ApiRequest::new(Method::GET, path).with_query(query);
        decode(self.transport.send(request).await?)
    }

    /// `POST path` with a JSON body
    pub async fn send_post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = ApiRequest::new(Method::POST, path).with_json(encode(body)?);
        decode(self.transport.send(request).await?)
    }

    /// `PUT path` with a JSON body
    pub async fn send_put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = ApiRequest::new(Method::PUT, path).with_json(encode(body)?);
        decode(self.transport.send(request).await?)
    }

    /// `DELETE path`
    ///
    /// An empty success body (e.g. `204 No Content`) decodes as `{}`, so
    /// payload-free envelopes like `MessageResponse` still succeed.
    pub async fn send_delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = ApiRequest::new(Method::DELETE, path);
        let value = match self.transport.send(request).await? {
            Value::Null => Value::Object(Map::new()),
            value => value,
        };
        decode(value)
    }

    /// `POST path` as multipart form data
    pub async fn send_upload<T: DeserializeOwned>(
        &self,
        path: &str,
        files: Vec<FilePart>,
    ) -> Result<T> {
        let request = ApiRequest::new(Method::POST, path).with_files(files);
        decode(self.transport.send(request).await?)
    }
}

/// Decode a JSON body into `T`, failing with [`AppError::Decode`] on mismatch.
fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        tracing::error!(error = %e, "Response does not match expected schema");
        AppError::Decode(e.to_string())
    })
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| AppError::Decode(e.to_string()))
}

/// Build `/<segments…>` with every segment percent-encoded.
pub(crate) fn path(segments: &[&str]) -> String {
    segments.iter().fold(String::new(), |mut acc, segment| {
        acc.push('/');
        acc.push_str(&urlencoding::encode(segment));
        acc
    })
}

/// Flatten a params struct into query pairs, skipping unset (null) fields.
pub(crate) fn query_pairs<P: Serialize>(params: &P) -> Result<Vec<(String, String)>> {
    let value = encode(params)?;
    let Value::Object(map) = value else {
        return Ok(Vec::new());
    };

    Ok(map
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((key, s)),
            Value::Array(items) => Some((
                key,
                items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string).unwrap_or_else(|| item.to_string()))
                    .collect::<Vec<_>>()
                    .join(","),
            )),
            other => Some((key, other.to_string())),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::mock::MockTransport;
    use shared::dto::{DocumentListParams, TaskListParams, TaskStatus};
    use shared::{ApiResponse, MessageResponse};

    #[test]
    fn test_path_encodes_segments() {
        assert_eq!(path(&["documents", "d1"]), "/documents/d1");
        assert_eq!(path(&["upload", "báo cáo.pdf"]), "/upload/b%C3%A1o%20c%C3%A1o.pdf");
        assert_eq!(path(&["projects", "p1", "members", "u/2"]), "/projects/p1/members/u%2F2");
    }

    #[test]
    fn test_query_pairs_skip_unset_fields() {
        let params = DocumentListParams {
            project: Some("p1".to_string()),
            page: Some(2),
            ..Default::default()
        };
        let mut pairs = query_pairs(&params).unwrap();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "2".to_string()),
                ("project".to_string(), "p1".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_enums_use_wire_names() {
        let params = TaskListParams {
            status: Some(TaskStatus::InProgress),
            assigned_to: Some("u1".to_string()),
            ..Default::default()
        };
        let mut pairs = query_pairs(&params).unwrap();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("assignedTo".to_string(), "u1".to_string()),
                ("status".to_string(), "in_progress".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_delete_body_is_a_message_response() {
        let mock = MockTransport::new();
        mock.reply(Method::DELETE, "/upload/a.png", Value::Null);
        mock.reply(Method::DELETE, "/projects/p1/members/u1", Value::Null);
        let api = mock.client();

        let response: MessageResponse = api.send_delete("/upload/a.png").await.unwrap();
        assert_eq!(response, MessageResponse::default());

        // An envelope that needs `data` still rejects an empty body
        let err = api
            .send_delete::<ApiResponse<Vec<String>>>("/projects/p1/members/u1")
            .await;
        assert!(matches!(err, Err(AppError::Decode(_))));
    }

    #[test]
    fn test_query_pairs_of_unit_is_empty() {
        assert!(query_pairs(&()).unwrap().is_empty());
    }
}
