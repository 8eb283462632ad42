use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Which question source backs `/generate-questions`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuestionBackend {
    /// Prompt the LLM; fall back to the generic list on any failure.
    #[default]
    Llm,
    /// Deterministic keyword branching on the product name. No external call.
    Keyword,
    /// Fixed demo list, identical for every product.
    Static,
}

impl QuestionBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionBackend::Llm => "llm",
            QuestionBackend::Keyword => "keyword",
            QuestionBackend::Static => "static",
        }
    }
}

impl FromStr for QuestionBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "llm" => Ok(QuestionBackend::Llm),
            "keyword" => Ok(QuestionBackend::Keyword),
            "static" => Ok(QuestionBackend::Static),
            other => Err(anyhow!(
                "unknown question backend '{other}' (expected llm, keyword or static)"
            )),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub llm_timeout_secs: u64,
    pub question_backend: QuestionBackend,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            gemini_api_key: lookup("GEMINI_API_KEY")
                .filter(|k| !k.trim().is_empty())
                .context("Required environment variable 'GEMINI_API_KEY' is not set")?,
            gemini_model: var_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_base_url: var_or("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            llm_timeout_secs: var_or("LLM_TIMEOUT_SECS", "30")
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            question_backend: var_or("QUESTION_BACKEND", "llm")
                .parse::<QuestionBackend>()
                .context("QUESTION_BACKEND is invalid")?,
            port: var_or("PORT", "5001")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var_or("RUST_LOG", "info"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "secret")])).unwrap();
        assert_eq!(config.gemini_api_key, "secret");
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(config.llm_timeout_secs, 30);
        assert_eq!(config.question_backend, QuestionBackend::Llm);
        assert_eq!(config.port, 5001);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_api_key_fails() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_fails() {
        assert!(Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "  ")])).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("GEMINI_BASE_URL", "http://localhost:9000/"),
            ("LLM_TIMEOUT_SECS", "5"),
            ("QUESTION_BACKEND", "Keyword"),
            ("PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.gemini_model, "gemini-1.5-pro");
        assert_eq!(config.gemini_base_url, "http://localhost:9000");
        assert_eq!(config.llm_timeout_secs, 5);
        assert_eq!(config.question_backend, QuestionBackend::Keyword);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_port_fails() {
        let result = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "k"), ("PORT", "http")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_backend_fails() {
        let result = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("QUESTION_BACKEND", "oracle"),
        ]));
        assert!(result.is_err());
    }
}
