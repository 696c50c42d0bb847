//! # Document Store
//!
//! Mirrors `/documents`. New documents are shown most recent first, so
//! `create` prepends.

use shared::{
    CreateDocumentRequest, Document, DocumentListParams, ShareDocumentRequest,
    UpdateDocumentRequest,
};

use super::messages::{self, DOCUMENTS};
use super::state::{ResourceStore, StoreCell};
use crate::core::{FilePart, Result};
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct DocumentStore {
    api: ApiClient,
    cell: StoreCell<Document>,
}

impl ResourceStore for DocumentStore {
    type Item = Document;

    fn cell(&self) -> &StoreCell<Document> {
        &self.cell
    }
}

impl DocumentStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            cell: StoreCell::default(),
        }
    }

    pub async fn fetch_documents(&self, params: &DocumentListParams) -> Result<Vec<Document>> {
        let response = self
            .cell
            .run(
                "fetch_documents",
                DOCUMENTS.fetch_list,
                self.api.get_documents(params),
                |state, response| state.replace_all(response.data.clone(), response.count),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn fetch_document(&self, id: &str) -> Result<Document> {
        let response = self
            .cell
            .run(
                "fetch_document",
                DOCUMENTS.fetch_one,
                self.api.get_document(id),
                |state, response| state.current = Some(response.data.clone()),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn create_document(&self, request: &CreateDocumentRequest) -> Result<Document> {
        let response = self
            .cell
            .run(
                "create_document",
                DOCUMENTS.create,
                self.api.create_document(request),
                |state, response| state.prepend(response.data.clone()),
            )
            .await?;
        Ok(response.data)
    }

    /// Upload the file, then create the document pointing at it.
    ///
    /// These are two independent requests: if creation fails the uploaded
    /// file stays on the server.
    pub async fn upload_document(
        &self,
        file: FilePart,
        mut request: CreateDocumentRequest,
    ) -> Result<Document> {
        let uploaded = self
            .cell
            .run("upload_document", messages::UPLOAD, self.api.upload_file(file), |_, _| {})
            .await?
            .data;

        request.file_path = uploaded.file_path;
        request.file_type = request.file_type.or(uploaded.file_type);
        request.size = request.size.or(Some(uploaded.size));
        self.create_document(&request).await
    }

    pub async fn update_document(&self, id: &str, request: &UpdateDocumentRequest) -> Result<Document> {
        let response = self
            .cell
            .run(
                "update_document",
                DOCUMENTS.update,
                self.api.update_document(id, request),
                |state, response| state.replace(&response.data),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn delete_document(&self, id: &str) -> Result<()> {
        self.cell
            .run(
                "delete_document",
                DOCUMENTS.delete,
                self.api.delete_document(id),
                |state, _| state.remove(id),
            )
            .await?;
        Ok(())
    }

    pub async fn share_document(&self, id: &str, user_ids: Vec<String>) -> Result<Document> {
        let request = ShareDocumentRequest { user_ids };
        let response = self
            .cell
            .run(
                "share_document",
                messages::DOCUMENT_SHARE,
                self.api.share_document(id, &request),
                |state, response| state.replace(&response.data),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn unshare_document(&self, id: &str, user_ids: Vec<String>) -> Result<Document> {
        let request = ShareDocumentRequest { user_ids };
        let response = self
            .cell
            .run(
                "unshare_document",
                messages::DOCUMENT_UNSHARE,
                self.api.unshare_document(id, &request),
                |state, response| state.replace(&response.data),
            )
            .await?;
        Ok(response.data)
    }
}
