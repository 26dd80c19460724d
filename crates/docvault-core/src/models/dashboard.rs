use serde::{Deserialize, Serialize};

use super::DocumentId;

/// Aggregate view of all uploads, served on the same path as the flat list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_files: u64,
    #[serde(default)]
    pub file_types: Vec<FileTypeCount>,
    #[serde(default)]
    pub user_file_counts: Vec<UserFileCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTypeCount {
    pub file_extension: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFileCount {
    #[serde(rename = "user__username")]
    pub username: String,
    pub file_count: u64,
    #[serde(default)]
    pub files: Vec<DashboardFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardFile {
    pub id: DocumentId,
    pub name: String,
    pub size: u64,
    #[serde(default)]
    pub description: Option<String>,
    pub file_extension: String,
    pub file: String,
}
