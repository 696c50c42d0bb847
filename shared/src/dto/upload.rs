use serde::{Deserialize, Serialize};

use super::envelope::Entity;

/// Descriptor returned by `POST /upload` for each stored file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub file_path: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub size: u64,
}

/// Uploads have no database id; the stored path identifies them.
impl Entity for UploadedFile {
    fn id(&self) -> &str {
        &self.file_path
    }
}

impl UploadedFile {
    /// Server-side name used by `DELETE /upload/:filename`.
    pub fn stored_name(&self) -> &str {
        match &self.file_name {
            Some(name) if !name.is_empty() => name.as_str(),
            _ => self.file_path.rsplit('/').next().unwrap_or(&self.file_path),
        }
    }
}
