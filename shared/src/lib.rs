use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod dashboard;
mod uptime;

pub use dashboard::{load_dashboard, Dashboard, DashboardState, FetchError, RawResponse};
pub use uptime::{format_uptime, uptime_label};

pub const HEALTH_PATH: &str = "/api/health";
pub const HELLO_PATH: &str = "/api/hello";
pub const INFO_PATH: &str = "/api/info";

/// Endpoints advertised by the root index, in the order they are listed.
pub const API_ENDPOINTS: [&str; 3] = [HEALTH_PATH, HELLO_PATH, INFO_PATH];

/// Health check response from `/api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    /// RFC 3339 UTC timestamp of when the check was answered.
    pub timestamp: String,
}

impl HealthStatus {
    /// A `"healthy"` status stamped with the given instant.
    pub fn healthy_at(now: DateTime<Utc>) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: now.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }

    pub fn checked_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// Greeting returned by `/api/hello`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelloMessage {
    pub message: String,
}

/// Runtime description returned by `/api/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub app_name: String,
    pub framework: String,
    #[serde(default)]
    pub api_endpoint: String,
    pub deployed_on: String,
    /// Server runtime version. Keeps the `nodeVersion` wire name.
    pub node_version: String,
    pub platform: String,
    /// Seconds since the server started.
    pub uptime: f64,
}

/// Index body served at `/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiIndex {
    pub message: String,
    pub endpoints: Vec<String>,
}
