use std::fmt;
use std::path::PathBuf;

/// Error types that can occur while running the sentiment pipeline.
#[derive(Debug)]
pub enum SentimentError {
    /// Required configuration value missing or invalid
    ConfigError(String),
    /// Input file produced no usable lines
    EmptyInput(PathBuf),
    /// File read/write errors
    IoError(String),
    /// HTTP request/response errors
    HttpError(String),
    /// Errors returned by the LLM provider
    ProviderError(String),
    /// Model output could not be parsed as a JSON array.
    /// Carries the raw, unmodified model output for manual inspection.
    DecodeError {
        message: String,
        raw_output: String,
    },
}

impl fmt::Display for SentimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentError::ConfigError(e) => write!(f, "Config Error: {}", e),
            SentimentError::EmptyInput(path) => {
                write!(f, "Empty Input: no non-blank lines in {}", path.display())
            }
            SentimentError::IoError(e) => write!(f, "IO Error: {}", e),
            SentimentError::HttpError(e) => write!(f, "HTTP Error: {}", e),
            SentimentError::ProviderError(e) => write!(f, "Provider Error: {}", e),
            SentimentError::DecodeError { message, .. } => {
                write!(f, "JSON Parse Error: {}", message)
            }
        }
    }
}

impl std::error::Error for SentimentError {}

/// Converts reqwest HTTP errors into SentimentErrors
impl From<reqwest::Error> for SentimentError {
    fn from(err: reqwest::Error) -> Self {
        SentimentError::HttpError(err.to_string())
    }
}

/// Converts filesystem errors into SentimentErrors
impl From<std::io::Error> for SentimentError {
    fn from(err: std::io::Error) -> Self {
        SentimentError::IoError(err.to_string())
    }
}
