//! Axum route handlers for transparency scoring.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::ProductInfo;
use crate::scoring::models::{QaPair, ScoreResult};
use crate::scoring::scorer::score_transparency;
use crate::state::AppState;

/// `llm` for a real assessment, `fallback` when the score is a failure placeholder.
pub const SCORE_SOURCE_HEADER: &str = "x-score-source";

#[derive(Debug, Default, Deserialize)]
pub struct TransparencyScoreRequest {
    pub product_name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub questions_and_answers: Vec<QaPair>,
}

pub type ScoreResponse = ([(&'static str, &'static str); 1], Json<ScoreResult>);

/// POST /transparency-score
pub async fn handle_transparency_score(
    State(state): State<AppState>,
    payload: Result<Json<TransparencyScoreRequest>, JsonRejection>,
) -> Result<ScoreResponse, AppError> {
    let Json(request) = payload?;
    let product = ProductInfo::require_name(
        request.product_name.as_deref(),
        request.description.as_deref(),
    )?;

    let result = score_transparency(&state.llm, &product, &request.questions_and_answers).await;
    let source = if result.is_failure() { "fallback" } else { "llm" };
    info!(
        "Transparency score for '{}': {} (source: {source})",
        product.product_name, result.score
    );

    Ok(([(SCORE_SOURCE_HEADER, source)], Json(result)))
}
