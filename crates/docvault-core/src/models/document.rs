use std::fmt;

use serde::{Deserialize, Serialize};

pub type DocumentId = i64;

/// One row of the flat documents list shown on the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Passed through as sent by the server; the unit is not defined client side.
    pub size: u64,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub created_by_id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub file_type: String,
}

impl Document {
    /// The stored file reference used for downloads, if any.
    pub fn download_target(&self) -> Option<&str> {
        self.file.as_deref().or(self.file_url.as_deref())
    }
}

/// Binary content picked in the browser for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for UploadFile {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Validated multipart upload for `/api/v1/documents/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub name: String,
    pub description: String,
    pub size: u64,
    pub file: UploadFile,
}
