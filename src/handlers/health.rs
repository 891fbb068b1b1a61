use axum::Json;

use crate::schemas::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
