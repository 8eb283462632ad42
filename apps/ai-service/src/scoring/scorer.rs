//! Transparency Scorer: asks the LLM for a 1-100 score and never raises.
//!
//! Failures become `score: 0` with a rationale naming the failure mode.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::llm_client::{LlmClient, LlmError};
use crate::models::ProductInfo;
use crate::scoring::models::{QaPair, ScoreResult};
use crate::scoring::prompts::build_score_prompt;

pub const CONNECT_FAILURE: &str = "Failed to connect to the LLM service.";
pub const PARSE_FAILURE: &str = "Failed to parse LLM response.";
pub const EMPTY_FAILURE: &str = "LLM returned an empty response.";

const MIN_SCORE: f64 = 1.0;
const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Deserialize)]
struct RawScore {
    score: f64,
    #[serde(default)]
    rationale: String,
}

pub async fn score_transparency(
    llm: &LlmClient,
    product: &ProductInfo,
    pairs: &[QaPair],
) -> ScoreResult {
    let prompt = build_score_prompt(product, pairs);

    match llm.generate_json::<RawScore>(&prompt).await {
        Ok(raw) => {
            let result = normalize(raw);
            debug!(
                "Scored '{}' at {} from {} answers",
                product.product_name,
                result.score,
                pairs.len()
            );
            result
        }
        Err(e) => {
            warn!(
                "Transparency scoring for '{}' failed: {e}",
                product.product_name
            );
            ScoreResult::failed(failure_rationale(&e))
        }
    }
}

/// Rounds and clamps the model's score into `[1, 100]`.
fn normalize(raw: RawScore) -> ScoreResult {
    ScoreResult {
        score: raw.score.round().clamp(MIN_SCORE, MAX_SCORE) as u32,
        rationale: raw.rationale.trim().to_string(),
    }
}

fn failure_rationale(error: &LlmError) -> &'static str {
    match error {
        LlmError::Http(_) | LlmError::Api { .. } => CONNECT_FAILURE,
        LlmError::EmptyContent => EMPTY_FAILURE,
        LlmError::NoJson | LlmError::Parse(_) => PARSE_FAILURE,
    }
}
