use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

pub const GREETING: &str = "Hello from the AI service!";

/// GET /
pub async fn root_handler() -> &'static str {
    GREETING
}

/// GET /health
/// Returns a simple status object with service version and active question backend.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME"),
        "question_backend": state.question_generator.backend().as_str(),
        "model": state.config.gemini_model,
    }))
}
