use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;
use crate::types::workout::ActivityKind;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "activities": ActivityKind::ALL.len()
    }))
}
