use gloo_net::http::Request;
use shared::{FetchError, RawResponse};

/// Same-origin GET returning the raw status and body.
pub async fn get(path: &'static str) -> Result<RawResponse, FetchError> {
    let response = Request::get(path).send().await.map_err(network)?;
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    Ok(RawResponse { status, body })
}

fn network(e: gloo_net::Error) -> FetchError {
    FetchError::Network(e.to_string())
}
