// Transparency scoring of a product from its follow-up answers.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod scorer;
