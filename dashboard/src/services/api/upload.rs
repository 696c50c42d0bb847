//! # Upload Endpoints
//!
//! Multipart file upload. Single uploads use the `file` field, batch uploads
//! the `files` field.

use std::path::Path;

use shared::{ApiResponse, MessageResponse, UploadedFile};

use super::client::{path, ApiClient};
use crate::core::{AppError, FilePart, Result};

impl FilePart {
    /// Build a part from in-memory bytes.
    pub fn new(field: &str, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            field: field.to_string(),
            file_name: file_name.into(),
            mime_type: None,
            bytes,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Read a file from disk into a part named after the file.
    pub async fn from_path(field: &str, file: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(file).await?;
        let file_name = file
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| AppError::Storage(format!("Invalid file name: {}", file.display())))?;
        Ok(Self::new(field, file_name, bytes))
    }
}

impl ApiClient {
    /// Upload one file.
    #[tracing::instrument(skip(self, file), fields(file_name = %file.file_name, size = file.bytes.len()))]
    pub async fn upload_file(&self, mut file: FilePart) -> Result<ApiResponse<UploadedFile>> {
        file.field = "file".to_string();
        self.send_upload("/upload", vec![file]).await
    }

    /// Upload several files in one request.
    #[tracing::instrument(skip(self, files), fields(count = files.len()))]
    pub async fn upload_files(&self, files: Vec<FilePart>) -> Result<ApiResponse<Vec<UploadedFile>>> {
        let files = files
            .into_iter()
            .map(|mut file| {
                file.field = "files".to_string();
                file
            })
            .collect();
        self.send_upload("/upload/multiple", files).await
    }

    /// Delete a stored file by its server-side name.
    pub async fn delete_uploaded_file(&self, file_name: &str) -> Result<MessageResponse> {
        self.send_delete(&path(&["upload", file_name])).await
    }
}
