//! Question Generator: pluggable, trait-based source of follow-up questions.
//!
//! Backends:
//! - `LlmQuestionGenerator`: prompts the LLM, falls back to the generic list on any failure.
//! - `KeywordQuestionGenerator`: deterministic branching on the product name, no LLM call.
//! - `StaticQuestionGenerator`: the fixed demo list.
//!
//! `AppState` holds an `Arc<dyn QuestionGenerator>`, chosen at startup via `QUESTION_BACKEND`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::QuestionBackend;
use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::ProductInfo;
use crate::questions::catalog::{demo_questions, fallback_questions, questions_for_product_name};
use crate::questions::models::{Question, QuestionSet, QuestionSource};
use crate::questions::prompts::build_questions_prompt;

/// Upper bound on questions returned from the LLM; extras are dropped.
pub const MAX_QUESTIONS: usize = 7;

/// Implement this to swap question sources without touching handlers.
///
/// Generation never fails: backends that call out substitute fallback data
/// and report it through `QuestionSet::source`.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, product: &ProductInfo) -> QuestionSet;

    fn backend(&self) -> QuestionBackend;

    /// Validates the raw request fields this backend reads.
    /// Default: only `product_name` is required.
    fn accept_input(
        &self,
        product_name: Option<&str>,
        description: Option<&str>,
    ) -> Result<ProductInfo, AppError> {
        ProductInfo::require_name(product_name, description)
    }
}

/// Builds the generator for the configured backend.
pub fn build_generator(backend: QuestionBackend, llm: LlmClient) -> Arc<dyn QuestionGenerator> {
    match backend {
        QuestionBackend::Llm => Arc::new(LlmQuestionGenerator::new(llm)),
        QuestionBackend::Keyword => Arc::new(KeywordQuestionGenerator),
        QuestionBackend::Static => Arc::new(StaticQuestionGenerator),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmQuestionGenerator
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmQuestionGenerator {
    llm: LlmClient,
}

#[derive(Debug, Deserialize)]
struct QuestionsEnvelope {
    questions: Vec<Question>,
}

impl LlmQuestionGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    async fn fetch(&self, product: &ProductInfo) -> Result<Vec<Question>, LlmError> {
        let prompt = build_questions_prompt(product);
        let envelope: QuestionsEnvelope = self.llm.generate_json(&prompt).await?;
        Ok(envelope.questions)
    }
}

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    async fn generate(&self, product: &ProductInfo) -> QuestionSet {
        match self.fetch(product).await {
            Ok(questions) => match accept_questions(questions) {
                Some(questions) => {
                    debug!(
                        "LLM produced {} questions for '{}'",
                        questions.len(),
                        product.product_name
                    );
                    QuestionSet::new(questions, QuestionSource::Llm)
                }
                None => {
                    warn!(
                        "LLM question list for '{}' was empty or malformed; using fallback",
                        product.product_name
                    );
                    QuestionSet::new(fallback_questions(), QuestionSource::Fallback)
                }
            },
            Err(e) => {
                warn!(
                    "Question generation for '{}' failed: {e}; using fallback",
                    product.product_name
                );
                QuestionSet::new(fallback_questions(), QuestionSource::Fallback)
            }
        }
    }

    fn backend(&self) -> QuestionBackend {
        QuestionBackend::Llm
    }

    /// The prompt embeds the description, so both fields are required.
    fn accept_input(
        &self,
        product_name: Option<&str>,
        description: Option<&str>,
    ) -> Result<ProductInfo, AppError> {
        ProductInfo::require_all(product_name, description)
    }
}

/// Rejects empty lists and lists with blank ids or texts. Truncates to `MAX_QUESTIONS`.
fn accept_questions(mut questions: Vec<Question>) -> Option<Vec<Question>> {
    if questions.is_empty() || !questions.iter().all(Question::is_well_formed) {
        return None;
    }
    questions.truncate(MAX_QUESTIONS);
    Some(questions)
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordQuestionGenerator
// ────────────────────────────────────────────────────────────────────────────

/// Pure keyword branching on the lower-cased product name. Deterministic.
pub struct KeywordQuestionGenerator;

#[async_trait]
impl QuestionGenerator for KeywordQuestionGenerator {
    async fn generate(&self, product: &ProductInfo) -> QuestionSet {
        QuestionSet::new(
            questions_for_product_name(&product.product_name),
            QuestionSource::Keyword,
        )
    }

    fn backend(&self) -> QuestionBackend {
        QuestionBackend::Keyword
    }
}

// ────────────────────────────────────────────────────────────────────────────
// StaticQuestionGenerator
// ────────────────────────────────────────────────────────────────────────────

pub struct StaticQuestionGenerator;

#[async_trait]
impl QuestionGenerator for StaticQuestionGenerator {
    async fn generate(&self, _product: &ProductInfo) -> QuestionSet {
        QuestionSet::new(demo_questions(), QuestionSource::Static)
    }

    fn backend(&self) -> QuestionBackend {
        QuestionBackend::Static
    }

    /// The demo list ignores its input, so nothing is required.
    fn accept_input(
        &self,
        product_name: Option<&str>,
        description: Option<&str>,
    ) -> Result<ProductInfo, AppError> {
        Ok(ProductInfo::lenient(product_name, description))
    }
}
