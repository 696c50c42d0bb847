//! # Forum Post Endpoints

use shared::{ApiResponse, ForumPost, ForumPostListParams, ForumPostPayload, MessageResponse};

use super::client::{path, query_pairs, ApiClient};
use crate::core::Result;

impl ApiClient {
    pub async fn get_forum_posts(&self, params: &ForumPostListParams) -> Result<ApiResponse<Vec<ForumPost>>> {
        self.send_get("/forum-posts", query_pairs(params)?).await
    }

    pub async fn get_forum_post(&self, id: &str) -> Result<ApiResponse<ForumPost>> {
        self.send_get(&path(&["forum-posts", id]), Vec::new()).await
    }

    pub async fn create_forum_post(&self, payload: &ForumPostPayload) -> Result<ApiResponse<ForumPost>> {
        self.send_post("/forum-posts", payload).await
    }

    pub async fn update_forum_post(
        &self,
        id: &str,
        payload: &ForumPostPayload,
    ) -> Result<ApiResponse<ForumPost>> {
        self.send_put(&path(&["forum-posts", id]), payload).await
    }

    pub async fn delete_forum_post(&self, id: &str) -> Result<MessageResponse> {
        self.send_delete(&path(&["forum-posts", id])).await
    }
}
