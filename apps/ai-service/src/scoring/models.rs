use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One answered follow-up question as submitted by the client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QaPair {
    #[serde(alias = "question")]
    pub question_text: String,
    /// Any JSON scalar: text, number or boolean answers all arrive here.
    #[serde(default, alias = "answer")]
    pub answer_value: Value,
}

impl QaPair {
    /// Human-readable answer for prompt rendering.
    pub fn answer_display(&self) -> String {
        match &self.answer_value {
            Value::Null => "(no answer)".to_string(),
            Value::String(s) if s.trim().is_empty() => "(no answer)".to_string(),
            Value::String(s) => s.trim().to_string(),
            Value::Bool(true) => "Yes".to_string(),
            Value::Bool(false) => "No".to_string(),
            other => other.to_string(),
        }
    }
}

/// Transparency score returned to the client.
/// `score` is 1-100 for a real assessment; 0 marks a failed assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub rationale: String,
}

impl ScoreResult {
    pub fn failed(rationale: &str) -> Self {
        Self {
            score: 0,
            rationale: rationale.to_string(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.score == 0
    }
}
