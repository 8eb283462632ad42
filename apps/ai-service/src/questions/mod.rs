// Follow-up question generation.
// Backends: LLM prompt with fallback, keyword branching, fixed demo list.
// All LLM calls go through llm_client.

pub mod catalog;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
