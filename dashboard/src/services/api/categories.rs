//! # Document Category Endpoints

use shared::{ApiResponse, CategoryPayload, DocumentCategory, MessageResponse};

use super::client::{path, ApiClient};
use crate::core::Result;

impl ApiClient {
    pub async fn get_categories(&self) -> Result<ApiResponse<Vec<DocumentCategory>>> {
        self.send_get("/document-categories", Vec::new()).await
    }

    pub async fn get_category(&self, id: &str) -> Result<ApiResponse<DocumentCategory>> {
        self.send_get(&path(&["document-categories", id]), Vec::new())
            .await
    }

    pub async fn create_category(&self, payload: &CategoryPayload) -> Result<ApiResponse<DocumentCategory>> {
        self.send_post("/document-categories", payload).await
    }

    pub async fn update_category(
        &self,
        id: &str,
        payload: &CategoryPayload,
    ) -> Result<ApiResponse<DocumentCategory>> {
        self.send_put(&path(&["document-categories", id]), payload).await
    }

    pub async fn delete_category(&self, id: &str) -> Result<MessageResponse> {
        self.send_delete(&path(&["document-categories", id])).await
    }
}
