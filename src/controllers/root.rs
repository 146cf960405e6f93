use axum::{extract::Json, response::IntoResponse};
use serde_json::json;

pub struct RootController;

impl RootController {
    pub async fn root() -> impl IntoResponse {
        Json(json!({"service": "songs-api"}))
    }

    pub async fn health_check() -> impl IntoResponse {
        Json(json!({"status": "ok"}))
    }
}
