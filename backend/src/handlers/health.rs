use axum::Json;
use shared::HealthStatus;

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy_at(chrono::Utc::now()))
}
