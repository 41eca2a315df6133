use axum::{extract::State, Json};
use shared::AppInfo;
use std::sync::Arc;

use crate::AppState;

/// Version reported in the `nodeVersion` field.
pub const RUNTIME_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Describe the running service. Configured values and uptime are read per request.
pub async fn info(State(state): State<Arc<AppState>>) -> Json<AppInfo> {
    Json(AppInfo {
        app_name: "Axum Backend".to_string(),
        framework: "Axum".to_string(),
        api_endpoint: state.config.api_endpoint.clone(),
        deployed_on: state.config.deployed_on.clone(),
        node_version: RUNTIME_VERSION.to_string(),
        platform: std::env::consts::OS.to_string(),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}
