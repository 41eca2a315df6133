mod config;
mod errors;
mod handlers;

use crate::config::Config;
use axum::{routing::get, Router};
use clap::Parser;
use std::{sync::Arc, time::Instant};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug, Clone)]
#[command(name = "backend")]
#[command(about = "Status API server")]
struct Args {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,
}

pub struct AppState {
    pub config: Config,
    /// Reference point for the uptime reported by `/api/info`.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            started_at: Instant::now(),
        }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index::index))
        .route("/api/health", get(handlers::health::health))
        .route("/api/hello", get(handlers::hello::hello))
        .route("/api/info", get(handlers::info::info))
        .with_state(state)
        .fallback(handlers::fallback::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(port) = args.port {
        config.port = port;
    }
    tracing::info!(
        "Deployed on {}, advertising {}",
        config.deployed_on,
        config.api_endpoint
    );

    let addr = config.address();
    let app_state = Arc::new(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde::de::DeserializeOwned;
    use shared::{ApiIndex, AppInfo, HealthStatus, HelloMessage};
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = Config::from_lookup(|key| match key {
            "DEPLOYED_ON" => Some("test-rig".to_string()),
            "API_ENDPOINT" => Some("http://api.test".to_string()),
            _ => None,
        });
        app(Arc::new(AppState::new(config)))
    }

    async fn get_json<T: DeserializeOwned>(app: &Router, path: &str) -> T {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {path}");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_healthy_and_freshly_stamped() {
        let app = test_app();
        let health: HealthStatus = get_json(&app, "/api/health").await;

        assert_eq!(health.status, "healthy");
        let checked_at = health.checked_at().expect("timestamp should parse");
        let skew = chrono::Utc::now() - checked_at;
        assert!(skew.num_seconds().abs() < 5, "stale timestamp: {skew}");
    }

    #[tokio::test]
    async fn hello_returns_fixed_greeting() {
        let app = test_app();
        let first: HelloMessage = get_json(&app, "/api/hello").await;
        let second: HelloMessage = get_json(&app, "/api/hello").await;

        assert!(!first.message.is_empty());
        assert_eq!(first.message, handlers::hello::GREETING);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn info_reports_config_and_runtime() {
        let app = test_app();
        let info: AppInfo = get_json(&app, "/api/info").await;

        assert_eq!(info.app_name, "Axum Backend");
        assert_eq!(info.framework, "Axum");
        assert_eq!(info.deployed_on, "test-rig");
        assert_eq!(info.api_endpoint, "http://api.test");
        assert_eq!(info.node_version, handlers::info::RUNTIME_VERSION);
        assert_eq!(info.node_version, format!("v{}", env!("CARGO_PKG_VERSION")));
        assert_eq!(info.platform, std::env::consts::OS);
        assert!(info.uptime >= 0.0);
    }

    #[tokio::test]
    async fn info_uptime_increases_between_calls() {
        let app = test_app();
        let first: AppInfo = get_json(&app, "/api/info").await;
        tokio::time::sleep(Duration::from_millis(20)).await;
        let second: AppInfo = get_json(&app, "/api/info").await;

        assert!(first.uptime >= 0.0);
        assert!(second.uptime > first.uptime);
    }

    #[tokio::test]
    async fn root_lists_endpoints() {
        let app = test_app();
        let index: ApiIndex = get_json(&app, "/").await;

        assert_eq!(index.message, "Axum Backend API");
        assert_eq!(
            index.endpoints,
            vec!["/api/health", "/api/hello", "/api/info"]
        );
    }

    #[tokio::test]
    async fn any_origin_is_allowed() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/hello")
                    .header(header::ORIGIN, "http://elsewhere.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn unknown_path_is_json_404() {
        let response = test_app()
            .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "not found: /api/nope");
    }
}
