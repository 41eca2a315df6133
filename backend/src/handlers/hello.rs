use axum::Json;
use shared::HelloMessage;

pub const GREETING: &str = "Hello from the Axum backend";

pub async fn hello() -> Json<HelloMessage> {
    Json(HelloMessage {
        message: GREETING.to_string(),
    })
}
