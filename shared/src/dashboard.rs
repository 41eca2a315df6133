//! Client-side loading of the dashboard payloads.
//!
//! The transport is passed in as a closure so the same aggregation runs over
//! `gloo-net` in the browser and over scripted responses in tests.

use std::future::Future;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{AppInfo, HealthStatus, HelloMessage, HEALTH_PATH, HELLO_PATH, INFO_PATH};

/// Status line and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("{0}")]
    Network(String),

    #[error("Failed to fetch API data")]
    Status { path: String, status: u16 },

    #[error("invalid response from {path}: {message}")]
    Decode { path: String, message: String },
}

/// Everything the dashboard renders, fetched together.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub health: HealthStatus,
    pub hello: HelloMessage,
    pub info: AppInfo,
}

/// View state of the dashboard. `Loaded` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    #[default]
    Loading,
    Loaded(Dashboard),
    Failed(String),
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DashboardState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            DashboardState::Loaded(dashboard) => Some(dashboard),
            _ => None,
        }
    }
}

impl From<Result<Dashboard, FetchError>> for DashboardState {
    fn from(result: Result<Dashboard, FetchError>) -> Self {
        match result {
            Ok(dashboard) => DashboardState::Loaded(dashboard),
            Err(e) => DashboardState::Failed(e.to_string()),
        }
    }
}

/// Fetch health, hello and info concurrently.
///
/// The first failure wins; results of the other requests are dropped.
pub async fn load_dashboard<F, Fut>(get: F) -> Result<Dashboard, FetchError>
where
    F: Fn(&'static str) -> Fut,
    Fut: Future<Output = Result<RawResponse, FetchError>>,
{
    let (health, hello, info) = futures::try_join!(
        fetch_json::<HealthStatus, _, _>(&get, HEALTH_PATH),
        fetch_json::<HelloMessage, _, _>(&get, HELLO_PATH),
        fetch_json::<AppInfo, _, _>(&get, INFO_PATH),
    )?;

    Ok(Dashboard {
        health,
        hello,
        info,
    })
}

async fn fetch_json<T, F, Fut>(get: &F, path: &'static str) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    F: Fn(&'static str) -> Fut,
    Fut: Future<Output = Result<RawResponse, FetchError>>,
{
    let response = get(path).await?;
    if !response.is_success() {
        return Err(FetchError::Status {
            path: path.to_string(),
            status: response.status,
        });
    }

    serde_json::from_str(&response.body).map_err(|e| FetchError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}
