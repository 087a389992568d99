use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    application::{dto::file_record_dto::FileRecordDTO, error::ApplicationError},
    domain::models::{file_record::FileRecord, stats::FileStats},
};

#[async_trait]
pub trait FileRecordRepository: Send + Sync {
    /// Inserts a single record and returns the persisted row.
    async fn create_record(&self, record: FileRecordDTO) -> Result<FileRecord, ApplicationError>;

    /// Looks up one record by id. Absence is `Ok(None)`, not an error.
    async fn get_record(&self, id: Uuid) -> Result<Option<FileRecord>, ApplicationError>;

    /// Adds 1 to the record's download counter as a single in-store
    /// update. Succeeds without effect when no record matches.
    async fn increment_download_count(&self, id: Uuid) -> Result<(), ApplicationError>;

    /// Counts all records and sums their sizes in one pass.
    async fn get_stats(&self) -> Result<FileStats, ApplicationError>;
}
