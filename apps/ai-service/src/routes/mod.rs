pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::questions::handlers as questions;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/generate-questions",
            get(questions::handle_generate_questions_query)
                .post(questions::handle_generate_questions),
        )
        .route(
            "/transparency-score",
            post(scoring::handle_transparency_score),
        )
        .with_state(state)
}
