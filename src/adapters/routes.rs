use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::{
    controllers::{file_controller::FileController, health_controller::HealthController},
    state::AppState,
};

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(HealthController::health_check))
        .route("/api/v1/files", post(FileController::upload_file))
        .route("/api/v1/files/stats", get(FileController::get_file_stats))
        .route("/api/v1/files/{file_id}", get(FileController::get_file))
        .route(
            "/api/v1/files/{file_id}/downloads",
            post(FileController::increment_download_count),
        )
        .with_state(app_state)
}
