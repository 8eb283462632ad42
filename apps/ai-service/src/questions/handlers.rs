//! Axum route handlers for question generation.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::questions::models::Question;
use crate::state::AppState;

/// Names the source of the returned list: `llm`, `keyword`, `static` or `fallback`.
pub const QUESTION_SOURCE_HEADER: &str = "x-question-source";

/// Fields are optional so that missing values surface as 400s with our own message.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub product_name: Option<String>,
    pub description: Option<String>,
}

pub type QuestionsResponse = ([(&'static str, &'static str); 1], Json<Vec<Question>>);

/// POST /generate-questions
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    payload: Result<Json<GenerateQuestionsRequest>, JsonRejection>,
) -> Result<QuestionsResponse, AppError> {
    let Json(request) = payload?;
    generate(&state, request).await
}

/// GET /generate-questions?product_name=...&description=...
pub async fn handle_generate_questions_query(
    State(state): State<AppState>,
    query: Result<Query<GenerateQuestionsRequest>, QueryRejection>,
) -> Result<QuestionsResponse, AppError> {
    let Query(request) = query?;
    generate(&state, request).await
}

async fn generate(
    state: &AppState,
    request: GenerateQuestionsRequest,
) -> Result<QuestionsResponse, AppError> {
    let generator = &state.question_generator;
    let product = generator.accept_input(
        request.product_name.as_deref(),
        request.description.as_deref(),
    )?;

    let set = generator.generate(&product).await;
    info!(
        "Generated {} questions for '{}' (source: {})",
        set.questions.len(),
        product.product_name,
        set.source.as_str()
    );

    Ok((
        [(QUESTION_SOURCE_HEADER, set.source.as_str())],
        Json(set.questions),
    ))
}
