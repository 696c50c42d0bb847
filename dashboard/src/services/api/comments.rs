//! # Comment Endpoints

use shared::{
    ApiResponse, Comment, CommentListParams, CreateCommentRequest, MessageResponse,
    UpdateCommentRequest,
};

use super::client::{path, query_pairs, ApiClient};
use crate::core::Result;

impl ApiClient {
    /// Comments of one target (forum post, task, document or user).
    pub async fn get_comments(&self, params: &CommentListParams) -> Result<ApiResponse<Vec<Comment>>> {
        self.send_get("/comments", query_pairs(params)?).await
    }

    pub async fn get_comment(&self, id: &str) -> Result<ApiResponse<Comment>> {
        self.send_get(&path(&["comments", id]), Vec::new()).await
    }

    /// Comments written by a user.
    pub async fn get_user_comments(&self, user_id: &str) -> Result<ApiResponse<Vec<Comment>>> {
        self.send_get(&path(&["comments", "user", user_id]), Vec::new())
            .await
    }

    pub async fn create_comment(&self, request: &CreateCommentRequest) -> Result<ApiResponse<Comment>> {
        self.send_post("/comments", request).await
    }

    pub async fn update_comment(
        &self,
        id: &str,
        request: &UpdateCommentRequest,
    ) -> Result<ApiResponse<Comment>> {
        self.send_put(&path(&["comments", id]), request).await
    }

    pub async fn delete_comment(&self, id: &str) -> Result<MessageResponse> {
        self.send_delete(&path(&["comments", id])).await
    }
}
