// Question generation prompt. Reuses the JSON-only fragment from llm_client::prompts.

use crate::llm_client::prompts::{render, JSON_ONLY_INSTRUCTION};
use crate::models::ProductInfo;

/// Replace `{product_name}`, `{description}` and `{json_only}` before sending.
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"You are a product transparency analyst. A seller has submitted the product below.
Generate between 3 and 7 follow-up questions that would reveal how transparent the
product is about its materials, sourcing, manufacturing, certifications and end of life.

PRODUCT NAME: {product_name}
PRODUCT DESCRIPTION: {description}

Return a JSON object with this EXACT schema (no extra fields):
{
  "questions": [
    {"id": "q_main_materials", "text": "What are the main materials used?", "type": "text"},
    {"id": "q_is_recyclable", "text": "Is the packaging recyclable?", "type": "boolean", "options": ["Yes", "No"]},
    {"id": "q_recycled_percentage", "text": "What percentage is recycled content?", "type": "number"}
  ]
}

RULES:
1. "id" must be unique snake_case starting with "q_".
2. "type" must be exactly one of "text", "number", "boolean".
3. Include "options": ["Yes", "No"] only for "boolean" questions.
4. Do not repeat information the description already answers.

{json_only}"#;

pub fn build_questions_prompt(product: &ProductInfo) -> String {
    render(
        QUESTIONS_PROMPT_TEMPLATE,
        &[
            ("product_name", product.product_name.as_str()),
            ("description", product.description.as_str()),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}
