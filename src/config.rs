//! Pipeline configuration.
//!
//! Configuration is resolved once, up front, and passed explicitly into
//! [`crate::pipeline::run`] rather than read as ambient state. This keeps the
//! pipeline testable with injected values.

use std::path::PathBuf;

use crate::error::SentimentError;

/// Environment variable holding the model identifier
pub const MODEL_ENV: &str = "MODEL_NAME";
/// Environment variable holding the API credential
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Default input file path
pub const DEFAULT_INPUT: &str = "data/input.txt";
/// Default output file path
pub const DEFAULT_OUTPUT: &str = "data/output.json";

/// Resolved configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Model identifier (e.g. "gemini-1.5-flash")
    pub model: String,
    /// API key for the provider
    pub api_key: String,
    /// Path to the input text file, one text per line
    pub input_path: PathBuf,
    /// Path the output JSON array is written to
    pub output_path: PathBuf,
    /// Optional request timeout in seconds
    pub timeout_seconds: Option<u64>,
}

impl PipelineConfig {
    /// Creates a configuration with the default input/output paths.
    pub fn new(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            api_key: api_key.into(),
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            timeout_seconds: None,
        }
    }

    /// Builds a configuration from the environment.
    ///
    /// Both `MODEL_NAME` and `GOOGLE_API_KEY` are required; a missing or empty
    /// value aborts with a config error before any I/O or network call.
    pub fn from_env() -> Result<Self, SentimentError> {
        Self::resolve(None, None)
    }

    /// Builds a configuration from optional overrides, falling back to the
    /// environment for anything unset.
    ///
    /// Whitespace-only environment values count as missing, the same as for
    /// [`PipelineConfig::from_env`].
    pub fn resolve(
        model: Option<String>,
        api_key: Option<String>,
    ) -> Result<Self, SentimentError> {
        let model = match model {
            Some(model) => model,
            None => require_env(MODEL_ENV)?,
        };
        let api_key = match api_key {
            Some(key) => key,
            None => require_env(API_KEY_ENV)?,
        };
        Ok(Self::new(model, api_key))
    }

    /// Sets the input file path.
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Sets the output file path.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Sets the request timeout in seconds.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}

fn require_env(key: &str) -> Result<String, SentimentError> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(SentimentError::ConfigError(format!(
            "{} not found in environment",
            key
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_paths() {
        let config = PipelineConfig::new("gemini-1.5-flash", "key")
            .with_input("custom/in.txt")
            .with_output("custom/out.json")
            .with_timeout(30);

        assert_eq!(config.input_path, PathBuf::from("custom/in.txt"));
        assert_eq!(config.output_path, PathBuf::from("custom/out.json"));
        assert_eq!(config.timeout_seconds, Some(30));
    }

    #[test]
    fn resolve_prefers_explicit_overrides() {
        // Both values supplied, so the environment is never consulted
        let config =
            PipelineConfig::resolve(Some("gemini-1.5-flash".into()), Some("key".into())).unwrap();
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.api_key, "key");
    }

    #[test]
    fn whitespace_only_env_value_counts_as_missing() {
        std::env::set_var("LLM_SENTIMENT_TEST_BLANK", "   ");
        match require_env("LLM_SENTIMENT_TEST_BLANK") {
            Err(SentimentError::ConfigError(msg)) => {
                assert!(msg.contains("LLM_SENTIMENT_TEST_BLANK"))
            }
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn unset_env_value_counts_as_missing() {
        assert!(matches!(
            require_env("LLM_SENTIMENT_TEST_UNSET"),
            Err(SentimentError::ConfigError(_))
        ));
    }

    #[test]
    fn defaults_match_data_directory() {
        let config = PipelineConfig::new("m", "k");
        assert_eq!(config.input_path, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.timeout_seconds, None);
    }
}
