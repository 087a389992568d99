use async_trait::async_trait;
use sqlx::query_as;
use uuid::Uuid;

use crate::{
    application::{
        dto::file_record_dto::FileRecordDTO, error::ApplicationError,
        repositories::file_record_repository::FileRecordRepository,
    },
    domain::models::{file_record::FileRecord, stats::FileStats},
};

pub struct PgFileRecordRepository {
    pool: sqlx::PgPool,
}

impl PgFileRecordRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileRecordRepository for PgFileRecordRepository {
    async fn create_record(&self, record: FileRecordDTO) -> Result<FileRecord, ApplicationError> {
        let mut record = record;
        record.sanitize();

        let query = r#"
            INSERT INTO files (
                id, filename, original_name, mime_type,
                file_size, file_path, upload_date, download_count
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
        "#;

        let new_record: FileRecord = record.into();

        let created: FileRecordDTO = query_as::<_, FileRecordDTO>(query)
            .bind(new_record.id)
            .bind(&new_record.filename)
            .bind(&new_record.original_name)
            .bind(&new_record.mime_type)
            .bind(new_record.file_size as i64)
            .bind(&new_record.file_path)
            .bind(new_record.upload_date)
            .bind(new_record.download_count as i64)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        Ok(created.into())
    }

    async fn get_record(&self, id: Uuid) -> Result<Option<FileRecord>, ApplicationError> {
        let query = "SELECT * FROM files WHERE id = $1";

        let fetched: Option<FileRecordDTO> = query_as::<_, FileRecordDTO>(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        Ok(fetched.map(Into::into))
    }

    async fn increment_download_count(&self, id: Uuid) -> Result<(), ApplicationError> {
        // The arithmetic runs in the store so concurrent calls on the
        // same id never lose an update. Zero rows matched is success.
        let query = r#"
            UPDATE files
            SET download_count = download_count + 1
            WHERE id = $1
        "#;

        sqlx::query(query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn get_stats(&self) -> Result<FileStats, ApplicationError> {
        // SUM over an empty table is NULL; COALESCE pins it to 0.
        let query = r#"
            SELECT COUNT(*), COALESCE(SUM(file_size), 0)::BIGINT
            FROM files
        "#;

        let (total_files, total_size): (i64, i64) = sqlx::query_as(query)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        Ok(FileStats {
            total_files: total_files as u64,
            total_size: total_size as u64,
        })
    }
}
