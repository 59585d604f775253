//! API banner at the root path

use axum::{response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};

use super::AppState;

/// Body of `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    /// Greeting text
    pub message: String,
}

/// Build the welcome route
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(welcome_handler))
}

async fn welcome_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to Black76 API".to_string(),
    })
}
