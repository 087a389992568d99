use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

pub struct HealthController;

impl HealthController {
    /// Liveness probe; deliberately touches nothing but the clock.
    /// GET /api/v1/health
    pub async fn health_check() -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "ok".to_string(),
            timestamp: Utc::now(),
        })
    }
}
