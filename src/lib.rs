//! Batch sentiment analysis of text lines through an LLM completion endpoint.
//!
//! # Overview
//! This crate reads a list of texts from a file, sends them in a single batched
//! prompt to a hosted LLM sentiment-analysis endpoint, defensively parses the
//! model's free-form reply into a JSON array, and persists the result as
//! pretty-printed JSON. The pipeline is strictly sequential:
//!
//! 1. [`input`] — load trimmed, non-blank lines from the input file
//! 2. [`prompt`] — embed the lines into a fixed instruction template
//! 3. [`backends`] — one completion request to the provider
//! 4. [`sanitize`] — strip markdown fences and extract the JSON-array span
//! 5. [`decode`] — strict JSON-array parse of the sanitized text
//! 6. [`output`] — write the array to the output file
//!
//! Any stage failure terminates the run; the output file is written only on
//! full success. The provider is reached through the [`completion`] trait so
//! tests can inject a mock model.

// Re-export for convenience
pub use async_trait::async_trait;

/// Backend implementations for supported LLM providers
pub mod backends;

/// Text completion request/response types and the provider trait
pub mod completion;

/// Pipeline configuration sourced from the environment
pub mod config;

/// Strict JSON-array decoding of sanitized model output
pub mod decode;

/// Error types and handling
pub mod error;

/// Input file loading
pub mod input;

/// Output file writing
pub mod output;

/// The linear pipeline driver
pub mod pipeline;

/// Prompt construction
pub mod prompt;

/// Sentiment record types
pub mod record;

/// Markdown fence stripping and JSON-array span extraction
pub mod sanitize;

pub use config::PipelineConfig;
pub use error::SentimentError;
pub use record::{Sentiment, SentimentRecord};

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
/// This is a no-op if the feature is not enabled.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
