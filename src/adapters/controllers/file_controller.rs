use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    adapters::{
        dto::file_dto::{FileResponse, FileStatsResponse, UploadFileRequest},
        state::AppState,
    },
    application::{dto::file_record_dto::FileRecordDTO, error::ApplicationError},
};

fn parse_file_id(file_id: &str) -> Result<Uuid, ApplicationError> {
    Uuid::parse_str(file_id).map_err(|e| {
        warn!("Invalid file id provided: {}, error: {}", file_id, e);
        ApplicationError::BadRequest("Field 'id' must be a valid UUID".to_string())
    })
}

pub struct FileController;

impl FileController {
    /// Registers metadata for a file whose bytes were already persisted
    /// by the upload pipeline.
    /// POST /api/v1/files
    pub async fn upload_file(
        State(app_state): State<AppState>,
        Json(body): Json<UploadFileRequest>,
    ) -> Result<(StatusCode, Json<FileResponse>), ApplicationError> {
        body.validate()?;

        let record_dto = FileRecordDTO {
            id: Uuid::new_v4(),
            filename: Some(body.filename),
            original_name: Some(body.original_name),
            mime_type: Some(body.mime_type),
            file_size: Some(body.file_size),
            file_path: Some(body.file_path),
            upload_date: Some(Utc::now()),
            download_count: Some(0),
        };

        let record = app_state
            .file_record_repository
            .create_record(record_dto)
            .await?;

        info!("File record created: {}", record.id);

        Ok((StatusCode::CREATED, Json(FileResponse::from(record))))
    }

    /// GET /api/v1/files/{file_id}
    pub async fn get_file(
        State(app_state): State<AppState>,
        Path(file_id): Path<String>,
    ) -> Result<Json<FileResponse>, ApplicationError> {
        let id = parse_file_id(&file_id)?;

        let record = app_state
            .file_record_repository
            .get_record(id)
            .await?
            .ok_or(ApplicationError::NotFound)?;

        Ok(Json(FileResponse::from(record)))
    }

    /// Fire-and-forget download tracking: succeeds even when the id
    /// matches nothing, so serving a download never fails on this call.
    /// POST /api/v1/files/{file_id}/downloads
    pub async fn increment_download_count(
        State(app_state): State<AppState>,
        Path(file_id): Path<String>,
    ) -> Result<StatusCode, ApplicationError> {
        let id = parse_file_id(&file_id)?;

        app_state
            .file_record_repository
            .increment_download_count(id)
            .await?;

        Ok(StatusCode::NO_CONTENT)
    }

    /// GET /api/v1/files/stats
    pub async fn get_file_stats(
        State(app_state): State<AppState>,
    ) -> Result<Json<FileStatsResponse>, ApplicationError> {
        let stats = app_state.file_record_repository.get_stats().await?;
        Ok(Json(FileStatsResponse::from(stats)))
    }
}
