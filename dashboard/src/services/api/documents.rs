//! # Document Endpoints
//!
//! Document records and sharing. The file bytes themselves go through
//! [`super::upload`]; a document only stores the returned `filePath`.

use shared::{
    ApiResponse, CreateDocumentRequest, Document, DocumentListParams, MessageResponse,
    ShareDocumentRequest, UpdateDocumentRequest,
};

use super::client::{path, query_pairs, ApiClient};
use crate::core::Result;

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn get_documents(&self, params: &DocumentListParams) -> Result<ApiResponse<Vec<Document>>> {
        self.send_get("/documents", query_pairs(params)?).await
    }

    pub async fn get_document(&self, id: &str) -> Result<ApiResponse<Document>> {
        self.send_get(&path(&["documents", id]), Vec::new()).await
    }

    pub async fn create_document(&self, request: &CreateDocumentRequest) -> Result<ApiResponse<Document>> {
        self.send_post("/documents", request).await
    }

    pub async fn update_document(
        &self,
        id: &str,
        request: &UpdateDocumentRequest,
    ) -> Result<ApiResponse<Document>> {
        self.send_put(&path(&["documents", id]), request).await
    }

    pub async fn delete_document(&self, id: &str) -> Result<MessageResponse> {
        self.send_delete(&path(&["documents", id])).await
    }

    /// Grant read access to the given users.
    pub async fn share_document(
        &self,
        id: &str,
        request: &ShareDocumentRequest,
    ) -> Result<ApiResponse<Document>> {
        self.send_post(&path(&["documents", id, "share"]), request).await
    }

    /// Revoke access previously granted with [`ApiClient::share_document`].
    pub async fn unshare_document(
        &self,
        id: &str,
        request: &ShareDocumentRequest,
    ) -> Result<ApiResponse<Document>> {
        self.send_post(&path(&["documents", id, "unshare"]), request).await
    }
}
