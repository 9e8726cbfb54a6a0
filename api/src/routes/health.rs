use crate::dto::HealthResponse;
use axum::Json;

/// GET /
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
