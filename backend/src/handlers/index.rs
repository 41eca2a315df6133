use axum::Json;
use shared::{ApiIndex, API_ENDPOINTS};

/// Root route: names the API and lists what it serves.
pub async fn index() -> Json<ApiIndex> {
    Json(ApiIndex {
        message: "Axum Backend API".to_string(),
        endpoints: API_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}
