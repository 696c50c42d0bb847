//! # Task Endpoints

use shared::{ApiResponse, MessageResponse, Task, TaskListParams, TaskPayload};

use super::client::{path, query_pairs, ApiClient};
use crate::core::Result;

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn get_tasks(&self, params: &TaskListParams) -> Result<ApiResponse<Vec<Task>>> {
        self.send_get("/tasks", query_pairs(params)?).await
    }

    pub async fn get_task(&self, id: &str) -> Result<ApiResponse<Task>> {
        self.send_get(&path(&["tasks", id]), Vec::new()).await
    }

    pub async fn create_task(&self, payload: &TaskPayload) -> Result<ApiResponse<Task>> {
        self.send_post("/tasks", payload).await
    }

    pub async fn update_task(&self, id: &str, payload: &TaskPayload) -> Result<ApiResponse<Task>> {
        self.send_put(&path(&["tasks", id]), payload).await
    }

    pub async fn delete_task(&self, id: &str) -> Result<MessageResponse> {
        self.send_delete(&path(&["tasks", id])).await
    }
}
