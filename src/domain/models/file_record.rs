use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound on accepted file sizes, in bytes (200 MiB).
pub const MAX_FILE_SIZE: u64 = 200 * 1024 * 1024;

/// One row of file metadata. The bytes themselves live outside this
/// service; `file_path` is an opaque pointer into that external store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: Uuid,
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub file_size: u64,
    pub file_path: String,
    pub upload_date: DateTime<Utc>,
    pub download_count: u64,
}
