use axum::{Json, response::IntoResponse};
use serde_json::json;

pub const GREETING: &str = "Hello World!";

pub struct RootController;

impl RootController {
    pub async fn root() -> impl IntoResponse {
        GREETING
    }

    pub async fn health_check() -> impl IntoResponse {
        Json(json!({
            "status": "ok",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        }))
    }
}
