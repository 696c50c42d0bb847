//! # Upload Store
//!
//! Keeps the files uploaded during this session, newest first.

use shared::UploadedFile;

use super::messages;
use super::state::{ResourceStore, StoreCell};
use crate::core::{FilePart, Result};
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct UploadStore {
    api: ApiClient,
    cell: StoreCell<UploadedFile>,
}

impl ResourceStore for UploadStore {
    type Item = UploadedFile;

    fn cell(&self) -> &StoreCell<UploadedFile> {
        &self.cell
    }
}

impl UploadStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            cell: StoreCell::default(),
        }
    }

    pub async fn upload_file(&self, file: FilePart) -> Result<UploadedFile> {
        let response = self
            .cell
            .run(
                "upload_file",
                messages::UPLOAD,
                self.api.upload_file(file),
                |state, response| {
                    state.prepend(response.data.clone());
                    state.current = Some(response.data.clone());
                },
            )
            .await?;
        Ok(response.data)
    }

    pub async fn upload_files(&self, files: Vec<FilePart>) -> Result<Vec<UploadedFile>> {
        let response = self
            .cell
            .run(
                "upload_files",
                messages::UPLOAD,
                self.api.upload_files(files),
                |state, response| {
                    for file in response.data.iter().rev() {
                        state.prepend(file.clone());
                    }
                },
            )
            .await?;
        Ok(response.data)
    }

    /// Delete by server-side file name.
    pub async fn delete_file(&self, file_name: &str) -> Result<()> {
        self.cell
            .run(
                "delete_file",
                messages::UPLOAD_DELETE,
                self.api.delete_uploaded_file(file_name),
                |state, _| {
                    state.items.retain(|file| file.stored_name() != file_name);
                    if state.current.as_ref().is_some_and(|file| file.stored_name() == file_name) {
                        state.current = None;
                    }
                },
            )
            .await?;
        Ok(())
    }
}
