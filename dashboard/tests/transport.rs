//! # HTTP Transport Tests
//!
//! `HttpTransport` against a local wiremock server: headers, error mapping,
//! body decoding, query strings and multipart uploads.

use std::sync::Arc;

use dashboard::config::ClientConfig;
use dashboard::core::{ApiRequest, AppError, FilePart, Transport};
use dashboard::services::api::{ApiClient, HttpTransport};
use dashboard::stores::{DocumentStore, ResourceStore};
use reqwest::Method;
use serde_json::{json, Value};
use shared::{DocumentListParams, ProjectListParams, ProjectStatus};
use wiremock::matchers::{
    body_string_contains, header, header_exists, header_regex, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> (Arc<HttpTransport>, ApiClient) {
    let config = ClientConfig::with_base_url(server.uri());
    let transport = Arc::new(HttpTransport::new(&config).unwrap());
    let api = ApiClient::new(transport.clone());
    (transport, api)
}

fn project_json(id: &str, name: &str) -> Value {
    json!({ "_id": id, "name": name, "status": "active", "members": [] })
}

#[tokio::test]
async fn test_bearer_token_and_request_id_are_sent() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/p1"))
        .and(header("authorization", "Bearer jwt-123"))
        .and(header_exists("x-request-id"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": project_json("p1", "Kho") })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let (_, api) = client_for(&server);
    api.set_token(Some("jwt-123".to_string()));

    // Act
    let response = api.get_project("p1").await.unwrap();

    // Assert
    assert!(response.success);
    assert_eq!(response.data.name, "Kho");
    assert_eq!(response.data.status, ProjectStatus::Active);
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mev/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "totalTransactions": 3, "totalProfit": 1.5, "totalCost": 0.5, "latestBlock": null, "topMevTypes": [] }
        })))
        .mount(&server)
        .await;
    let (_, api) = client_for(&server);

    api.get_mev_summary().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_error_body_message_is_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/projects/p1"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "success": false, "message": "Không có quyền" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Not Found" })))
        .mount(&server)
        .await;
    let (_, api) = client_for(&server);

    let err = api.delete_project("p1").await.unwrap_err();
    assert_eq!(
        err,
        AppError::Request {
            status: Some(403),
            message: Some("Không có quyền".to_string())
        }
    );
    assert_eq!(err.message_or("Không thể xóa dự án"), "Không có quyền");

    let err = api.get_project("missing").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.server_message(), Some("Not Found"));
}

#[tokio::test]
async fn test_error_without_message_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/t1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;
    let (_, api) = client_for(&server);

    let err = api.get_task("t1").await.unwrap_err();

    assert_eq!(err.status(), Some(502));
    assert_eq!(err.server_message(), None);
    assert_eq!(err.message_or("Không thể tải công việc"), "Không thể tải công việc");
    assert_eq!(err.to_string(), "Request failed");
}

#[tokio::test]
async fn test_unexpected_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": { "nope": 1 } })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects/p2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    let (_, api) = client_for(&server);

    assert!(matches!(api.get_project("p1").await, Err(AppError::Decode(_))));
    assert!(matches!(api.get_project("p2").await, Err(AppError::Decode(_))));
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/upload/a.txt"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    let (transport, _) = client_for(&server);

    let value = transport
        .send(ApiRequest::new(Method::DELETE, "/upload/a.txt"))
        .await
        .unwrap();

    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn test_no_content_delete_removes_document_from_store() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{ "_id": "doc1", "title": "Hợp đồng" }, { "_id": "doc2", "title": "Báo cáo" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/documents/doc1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let (_, api) = client_for(&server);
    let store = DocumentStore::new(api);
    store.fetch_documents(&DocumentListParams::default()).await.unwrap();

    // Act
    store.delete_document("doc1").await.unwrap();

    // Assert
    let ids: Vec<String> = store.items().into_iter().map(|d| d.id).collect();
    assert_eq!(ids, vec!["doc2".to_string()]);
    assert_eq!(store.error(), None);
}

#[tokio::test]
async fn test_list_filters_become_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(query_param("status", "on_hold"))
        .and(query_param("search", "kho bãi"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "count": 1,
            "data": [project_json("p1", "Kho bãi")]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let (_, api) = client_for(&server);

    let params = ProjectListParams {
        status: Some(ProjectStatus::OnHold),
        search: Some("kho bãi".to_string()),
        limit: Some(5),
        ..Default::default()
    };
    let response = api.get_projects(&params).await.unwrap();

    assert_eq!(response.count, Some(1));
    assert_eq!(response.data.len(), 1);
    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query_pairs().all(|(key, _)| key != "page"));
}

#[tokio::test]
async fn test_path_segments_are_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mev/addresses/a%20b%2Fc"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Không tìm thấy" })))
        .expect(1)
        .mount(&server)
        .await;
    let (_, api) = client_for(&server);

    let err = api.get_mev_address("a b/c").await.unwrap_err();

    assert_eq!(err.server_message(), Some("Không tìm thấy"));
}

#[tokio::test]
async fn test_single_upload_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains(r#"name="file"; filename="report.txt""#))
        .and(body_string_contains("quarterly numbers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "filePath": "/uploads/1700000000-report.txt",
                "fileName": "1700000000-report.txt",
                "originalName": "report.txt",
                "fileType": "text/plain",
                "size": 17
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let (_, api) = client_for(&server);

    let file = FilePart::new("ignored", "report.txt", b"quarterly numbers".to_vec()).with_mime_type("text/plain");
    let response = api.upload_file(file).await.unwrap();

    assert_eq!(response.data.stored_name(), "1700000000-report.txt");
    assert_eq!(response.data.size, 17);
}

#[tokio::test]
async fn test_batch_upload_uses_files_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload/multiple"))
        .and(body_string_contains(r#"name="files"; filename="a.png""#))
        .and(body_string_contains(r#"name="files"; filename="b.png""#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{ "filePath": "/uploads/a.png" }, { "filePath": "/uploads/b.png" }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let (_, api) = client_for(&server);

    let files = vec![
        FilePart::new("file", "a.png", vec![1, 2, 3]),
        FilePart::new("file", "b.png", vec![4, 5, 6]),
    ];
    let response = api.upload_files(files).await.unwrap();

    assert_eq!(response.data.len(), 2);
    assert_eq!(response.data[1].stored_name(), "b.png");
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    // Port 9 (discard) is closed on test machines
    let config = ClientConfig::with_base_url("http://127.0.0.1:9");
    let api = ApiClient::new(Arc::new(HttpTransport::new(&config).unwrap()));

    let err = api.get_mev_summary().await.unwrap_err();

    assert!(matches!(err, AppError::Network(_)));
    assert_eq!(err.status(), None);
}
