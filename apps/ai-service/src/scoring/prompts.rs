// Transparency scoring prompt. Reuses the JSON-only fragment from llm_client::prompts.

use crate::llm_client::prompts::{render, JSON_ONLY_INSTRUCTION};
use crate::models::ProductInfo;
use crate::scoring::models::QaPair;

/// Replace `{product_name}`, `{description}`, `{answers}` and `{json_only}` before sending.
pub const SCORE_PROMPT_TEMPLATE: &str = r#"You are a product transparency auditor. Rate how transparent the seller has been
about the product below, based on its description and the answers to follow-up questions.

PRODUCT NAME: {product_name}
PRODUCT DESCRIPTION: {description}

FOLLOW-UP ANSWERS:
{answers}

SCORING GUIDE:
- 80-100: specific, verifiable details on materials, origin, labor and end of life
- 50-79: mostly specific with a few vague or missing answers
- 20-49: largely vague, marketing language, or many unanswered questions
- 1-19: almost no concrete information

Return a JSON object with this EXACT schema (no extra fields):
{"score": 72, "rationale": "One or two sentences explaining the score."}

"score" must be an integer from 1 to 100.

{json_only}"#;

const NO_ANSWERS: &str = "(no answers provided)";

/// Renders answers as `Q: ...\nA: ...` blocks separated by a blank line.
pub fn render_answers(pairs: &[QaPair]) -> String {
    if pairs.is_empty() {
        return NO_ANSWERS.to_string();
    }
    pairs
        .iter()
        .map(|pair| format!("Q: {}\nA: {}", pair.question_text.trim(), pair.answer_display()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn build_score_prompt(product: &ProductInfo, pairs: &[QaPair]) -> String {
    let description = if product.description.is_empty() {
        "(not provided)"
    } else {
        product.description.as_str()
    };
    let answers = render_answers(pairs);

    render(
        SCORE_PROMPT_TEMPLATE,
        &[
            ("product_name", product.product_name.as_str()),
            ("description", description),
            ("answers", answers.as_str()),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs() -> Vec<QaPair> {
        vec![
            QaPair {
                question_text: "What are the main materials?".into(),
                answer_value: json!("Recycled PET"),
            },
            QaPair {
                question_text: "Is it BPA-free?".into(),
                answer_value: json!(true),
            },
        ]
    }

    #[test]
    fn test_render_answers_block() {
        assert_eq!(
            render_answers(&pairs()),
            "Q: What are the main materials?\nA: Recycled PET\n\nQ: Is it BPA-free?\nA: Yes"
        );
    }

    #[test]
    fn test_render_answers_empty() {
        assert_eq!(render_answers(&[]), NO_ANSWERS);
    }

    #[test]
    fn test_score_prompt_embeds_everything() {
        let product = ProductInfo {
            product_name: "Water Bottle".into(),
            description: String::new(),
        };
        let prompt = build_score_prompt(&product, &pairs());
        assert!(prompt.contains("PRODUCT NAME: Water Bottle"));
        assert!(prompt.contains("PRODUCT DESCRIPTION: (not provided)"));
        assert!(prompt.contains("Q: Is it BPA-free?\nA: Yes"));
        assert!(prompt.contains(r#"{"score": 72, "rationale""#));
        assert!(!prompt.contains("{answers}"));
    }
}
