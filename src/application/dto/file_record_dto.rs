use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::file_record::FileRecord;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileRecordDTO {
    #[serde(default)]
    pub id: Uuid,
    pub filename: Option<String>,
    pub original_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<u64>,
    pub file_path: Option<String>,
    pub upload_date: Option<DateTime<Utc>>,
    pub download_count: Option<u64>,
}

impl From<FileRecord> for FileRecordDTO {
    fn from(value: FileRecord) -> Self {
        FileRecordDTO {
            id: value.id,
            filename: Some(value.filename),
            original_name: Some(value.original_name),
            mime_type: Some(value.mime_type),
            file_size: Some(value.file_size),
            file_path: Some(value.file_path),
            upload_date: Some(value.upload_date),
            download_count: Some(value.download_count),
        }
    }
}

impl From<FileRecordDTO> for FileRecord {
    fn from(value: FileRecordDTO) -> Self {
        FileRecord {
            id: value.id,
            filename: value.filename.unwrap_or_default(),
            original_name: value.original_name.unwrap_or_default(),
            mime_type: value.mime_type.unwrap_or_default(),
            file_size: value.file_size.unwrap_or(0),
            file_path: value.file_path.unwrap_or_default(),
            upload_date: value.upload_date.unwrap_or_else(Utc::now),
            download_count: value.download_count.unwrap_or(0),
        }
    }
}
