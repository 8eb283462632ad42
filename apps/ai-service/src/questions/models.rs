use serde::{Deserialize, Serialize};

/// Answer kind the client should render for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Text,
    Number,
    Boolean,
}

/// A single follow-up question shown to the product submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// snake_case, unique within one response.
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    /// Only populated for boolean questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Question {
    pub fn text(id: &str, text: &str) -> Self {
        Self::new(id, text, QuestionType::Text)
    }

    pub fn number(id: &str, text: &str) -> Self {
        Self::new(id, text, QuestionType::Number)
    }

    pub fn boolean(id: &str, text: &str) -> Self {
        Self {
            options: Some(vec!["Yes".to_string(), "No".to_string()]),
            ..Self::new(id, text, QuestionType::Boolean)
        }
    }

    fn new(id: &str, text: &str, kind: QuestionType) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            kind,
            options: None,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty() && !self.text.trim().is_empty()
    }
}

/// Where a question list came from. Surfaced to clients in a response header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionSource {
    Llm,
    Keyword,
    Static,
    /// The LLM path failed and the generic list was substituted.
    Fallback,
}

impl QuestionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionSource::Llm => "llm",
            QuestionSource::Keyword => "keyword",
            QuestionSource::Static => "static",
            QuestionSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
    pub source: QuestionSource,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>, source: QuestionSource) -> Self {
        Self { questions, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_question_omits_options() {
        let value = serde_json::to_value(Question::text("q_origin", "Where?")).unwrap();
        assert_eq!(value, json!({"id": "q_origin", "text": "Where?", "type": "text"}));
    }

    #[test]
    fn test_boolean_question_carries_yes_no() {
        let value = serde_json::to_value(Question::boolean("q_reusable", "Reusable?")).unwrap();
        assert_eq!(value["type"], "boolean");
        assert_eq!(value["options"], json!(["Yes", "No"]));
    }

    #[test]
    fn test_deserialize_model_output() {
        let question: Question = serde_json::from_value(json!({
            "id": "q_weight",
            "text": "How much does it weigh in grams?",
            "type": "number"
        }))
        .unwrap();
        assert_eq!(question.kind, QuestionType::Number);
        assert!(question.options.is_none());
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result = serde_json::from_value::<Question>(json!({
            "id": "q_x", "text": "Pick one", "type": "multiple_choice"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_well_formed() {
        assert!(Question::text("q_a", "A?").is_well_formed());
        assert!(!Question::text("", "A?").is_well_formed());
        assert!(!Question::text("q_a", "  ").is_well_formed());
    }
}
