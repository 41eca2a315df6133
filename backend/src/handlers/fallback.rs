use axum::http::Uri;

use crate::errors::AppError;

pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!("No route for {}", uri.path());
    AppError::NotFound(uri.path().to_string())
}
