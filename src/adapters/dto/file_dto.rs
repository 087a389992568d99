use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    application::error::ApplicationError,
    domain::models::{
        file_record::{FileRecord, MAX_FILE_SIZE},
        stats::FileStats,
    },
};

#[derive(Debug, Deserialize)]
pub struct UploadFileRequest {
    pub filename: String,
    #[serde(rename = "originalName")]
    pub original_name: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    #[serde(rename = "fileSize")]
    pub file_size: u64,
    #[serde(rename = "filePath")]
    pub file_path: String,
}

impl UploadFileRequest {
    /// Checks every field before any store access. Negative sizes never
    /// reach this point: deserializing into `u64` already rejects them.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.filename.is_empty() {
            return Err(ApplicationError::BadRequest(
                "Field 'filename' must not be empty".to_string(),
            ));
        }
        if self.original_name.is_empty() {
            return Err(ApplicationError::BadRequest(
                "Field 'originalName' must not be empty".to_string(),
            ));
        }
        if self.mime_type.is_empty() {
            return Err(ApplicationError::BadRequest(
                "Field 'mimeType' must not be empty".to_string(),
            ));
        }
        if self.file_path.is_empty() {
            return Err(ApplicationError::BadRequest(
                "Field 'filePath' must not be empty".to_string(),
            ));
        }
        if self.file_size > MAX_FILE_SIZE {
            return Err(ApplicationError::PayloadTooLarge);
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct FileResponse {
    pub id: Uuid,
    pub filename: String,
    #[serde(rename = "originalName")]
    pub original_name: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    #[serde(rename = "fileSize")]
    pub file_size: u64,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "uploadDate")]
    pub upload_date: DateTime<Utc>,
    #[serde(rename = "downloadCount")]
    pub download_count: u64,
}

impl From<FileRecord> for FileResponse {
    fn from(record: FileRecord) -> Self {
        Self {
            id: record.id,
            filename: record.filename,
            original_name: record.original_name,
            mime_type: record.mime_type,
            file_size: record.file_size,
            file_path: record.file_path,
            upload_date: record.upload_date,
            download_count: record.download_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FileStatsResponse {
    #[serde(rename = "totalFiles")]
    pub total_files: u64,
    #[serde(rename = "totalSize")]
    pub total_size: u64,
}

impl From<FileStats> for FileStatsResponse {
    fn from(stats: FileStats) -> Self {
        Self {
            total_files: stats.total_files,
            total_size: stats.total_size,
        }
    }
}
