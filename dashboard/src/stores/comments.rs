//! # Comment Store
//!
//! Comments render oldest first under their parent, so `create` appends
//! instead of prepending like the other stores. Deleting a comment also
//! drops its direct replies; deeper descendants stay until the next fetch.

use shared::{Comment, CommentListParams, CreateCommentRequest, UpdateCommentRequest};

use super::messages::COMMENTS;
use super::state::{ResourceStore, StoreCell};
use crate::core::Result;
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct CommentStore {
    api: ApiClient,
    cell: StoreCell<Comment>,
}

impl ResourceStore for CommentStore {
    type Item = Comment;

    fn cell(&self) -> &StoreCell<Comment> {
        &self.cell
    }
}

impl CommentStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            cell: StoreCell::default(),
        }
    }

    pub async fn fetch_comments(&self, params: &CommentListParams) -> Result<Vec<Comment>> {
        let response = self
            .cell
            .run(
                "fetch_comments",
                COMMENTS.fetch_list,
                self.api.get_comments(params),
                |state, response| state.replace_all(response.data.clone(), response.count),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn fetch_comment(&self, id: &str) -> Result<Comment> {
        let response = self
            .cell
            .run(
                "fetch_comment",
                COMMENTS.fetch_one,
                self.api.get_comment(id),
                |state, response| state.current = Some(response.data.clone()),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn create_comment(&self, request: &CreateCommentRequest) -> Result<Comment> {
        let response = self
            .cell
            .run(
                "create_comment",
                COMMENTS.create,
                self.api.create_comment(request),
                |state, response| state.append(response.data.clone()),
            )
            .await?;
        Ok(response.data)
    }

    /// Reply to an existing comment, inheriting nothing but the parent id.
    pub async fn reply(&self, parent_id: &str, mut request: CreateCommentRequest) -> Result<Comment> {
        request.parent_comment = Some(parent_id.to_string());
        self.create_comment(&request).await
    }

    pub async fn update_comment(&self, id: &str, content: &str) -> Result<Comment> {
        let request = UpdateCommentRequest {
            content: content.to_string(),
        };
        let response = self
            .cell
            .run(
                "update_comment",
                COMMENTS.update,
                self.api.update_comment(id, &request),
                |state, response| state.replace(&response.data),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn delete_comment(&self, id: &str) -> Result<()> {
        self.cell
            .run(
                "delete_comment",
                COMMENTS.delete,
                self.api.delete_comment(id),
                |state, _| {
                    state.remove(id);
                    state.items.retain(|comment| !comment.is_reply_to(id));
                },
            )
            .await?;
        Ok(())
    }

    /// Direct replies to `parent_id` currently in the store.
    pub fn replies(&self, parent_id: &str) -> Vec<Comment> {
        self.cell.read(|state| {
            state
                .items
                .iter()
                .filter(|comment| comment.is_reply_to(parent_id))
                .cloned()
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::mock::MockTransport;
    use reqwest::Method;
    use serde_json::json;

    async fn thread_store(mock: &std::sync::Arc<MockTransport>) -> CommentStore {
        mock.reply(
            Method::GET,
            "/comments",
            json!({ "success": true, "data": [
                { "_id": "c1", "content": "Gốc", "parentComment": null },
                { "_id": "c2", "content": "Trả lời", "parentComment": "c1" },
                { "_id": "c3", "content": "Trả lời sâu", "parentComment": { "_id": "c2", "content": "Trả lời" } },
                { "_id": "c4", "content": "Khác" }
            ]}),
        );
        let store = CommentStore::new(mock.client());
        store
            .fetch_comments(&CommentListParams {
                forum_post: Some("f1".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        store
    }

    fn ids(store: &CommentStore) -> Vec<String> {
        store.items().into_iter().map(|c| c.id).collect()
    }

    #[tokio::test]
    async fn test_delete_removes_direct_replies() {
        let mock = MockTransport::new();
        let store = thread_store(&mock).await;

        mock.reply(Method::DELETE, "/comments/c1", json!({ "success": true, "message": "Đã xóa" }));
        store.delete_comment("c1").await.unwrap();

        // c3 replies to c2, not c1, so it survives
        assert_eq!(ids(&store), vec!["c3", "c4"]);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_thread() {
        let mock = MockTransport::new();
        let store = thread_store(&mock).await;

        mock.fail_bare(Method::DELETE, "/comments/c1", 500);
        assert!(store.delete_comment("c1").await.is_err());
        assert_eq!(ids(&store), vec!["c1", "c2", "c3", "c4"]);
        assert_eq!(store.error().as_deref(), Some(COMMENTS.delete));
    }

    #[tokio::test]
    async fn test_create_appends() {
        let mock = MockTransport::new();
        let store = thread_store(&mock).await;

        mock.reply(
            Method::POST,
            "/comments",
            json!({ "success": true, "data": { "_id": "c5", "content": "Mới", "parentComment": "c1" } }),
        );
        store
            .reply(
                "c1",
                CreateCommentRequest {
                    content: "Mới".to_string(),
                    forum_post: Some("f1".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(ids(&store).last().map(String::as_str), Some("c5"));
        assert_eq!(store.replies("c1").len(), 2);
        assert_eq!(
            mock.requests().pop().unwrap().body,
            crate::core::RequestBody::Json(json!({
                "content": "Mới", "forumPost": "f1", "parentComment": "c1"
            }))
        );
    }

    #[tokio::test]
    async fn test_update_replaces_content() {
        let mock = MockTransport::new();
        let store = thread_store(&mock).await;

        mock.reply(
            Method::PUT,
            "/comments/c4",
            json!({ "success": true, "data": { "_id": "c4", "content": "Đã sửa" } }),
        );
        store.update_comment("c4", "Đã sửa").await.unwrap();
        assert_eq!(store.snapshot().get("c4").unwrap().content, "Đã sửa");
        assert_eq!(store.snapshot().get("c1").unwrap().content, "Gốc");
    }
}
