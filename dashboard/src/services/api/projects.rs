//! # Project Endpoints
//!
//! Project CRUD plus membership management.

use shared::{AddMemberRequest, ApiResponse, MessageResponse, Project, ProjectListParams, ProjectPayload};

use super::client::{path, query_pairs, ApiClient};
use crate::core::Result;

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn get_projects(&self, params: &ProjectListParams) -> Result<ApiResponse<Vec<Project>>> {
        self.send_get("/projects", query_pairs(params)?).await
    }

    pub async fn get_project(&self, id: &str) -> Result<ApiResponse<Project>> {
        self.send_get(&path(&["projects", id]), Vec::new()).await
    }

    pub async fn create_project(&self, payload: &ProjectPayload) -> Result<ApiResponse<Project>> {
        self.send_post("/projects", payload).await
    }

    pub async fn update_project(&self, id: &str, payload: &ProjectPayload) -> Result<ApiResponse<Project>> {
        self.send_put(&path(&["projects", id]), payload).await
    }

    pub async fn delete_project(&self, id: &str) -> Result<MessageResponse> {
        self.send_delete(&path(&["projects", id])).await
    }

    /// Add a member; the backend answers with the updated project.
    pub async fn add_project_member(
        &self,
        id: &str,
        request: &AddMemberRequest,
    ) -> Result<ApiResponse<Project>> {
        self.send_post(&path(&["projects", id, "members"]), request).await
    }

    /// Remove a member; the backend answers with the updated project.
    pub async fn remove_project_member(&self, id: &str, user_id: &str) -> Result<ApiResponse<Project>> {
        self.send_delete(&path(&["projects", id, "members", user_id])).await
    }
}
