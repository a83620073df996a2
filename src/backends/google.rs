//! Google Gemini API client implementation for text completion.
//!
//! This module provides integration with Google's Gemini models through their
//! `generateContent` API. The sentiment pipeline issues exactly one completion
//! request per run; streaming, tool calling and embeddings are out of scope.
//!
//! # Example
//! ```no_run
//! use llm_sentiment::backends::google::Google;
//! use llm_sentiment::completion::{CompletionProvider, CompletionRequest};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Google::new(
//!         "your-api-key",
//!         None,       // Use default model
//!         Some(0.0),  // Temperature
//!         None,       // Default timeout
//!     );
//!
//!     let req = CompletionRequest::new("Classify the sentiment of: great!");
//!     let response = client.complete(&req).await.unwrap();
//!     println!("{}", response.text);
//! }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    completion::{CompletionProvider, CompletionRequest, CompletionResponse},
    error::SentimentError,
};

/// Client for interacting with Google's Gemini API.
///
/// Holds the configuration and state needed to make `generateContent`
/// requests. Implements the [`CompletionProvider`] trait.
pub struct Google {
    /// API key for authentication with Google's API
    pub api_key: String,
    /// Model identifier (e.g. "gemini-1.5-flash")
    pub model: String,
    /// Sampling temperature between 0.0 and 1.0
    pub temperature: Option<f32>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// HTTP client for making API requests
    client: Client,
}

/// Request body for content generation
#[derive(Serialize)]
struct GoogleGenerateRequest<'a> {
    /// Conversation contents; a single user turn for completion requests
    contents: Vec<GoogleContent<'a>>,
    /// Optional generation parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GoogleGenerationConfig>,
}

/// Individual content block in a request
#[derive(Serialize)]
struct GoogleContent<'a> {
    /// Role of the sender ("user" or "model")
    role: &'a str,
    /// Content parts of the message
    parts: Vec<GoogleContentPart<'a>>,
}

/// Text content within a message
#[derive(Serialize)]
struct GoogleContentPart<'a> {
    /// The actual text content
    text: &'a str,
}

/// Configuration parameters for text generation
#[derive(Serialize)]
struct GoogleGenerationConfig {
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none", rename = "maxOutputTokens")]
    max_output_tokens: Option<u32>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Response from the generation API
#[derive(Deserialize)]
struct GoogleGenerateResponse {
    /// Generated completion candidates
    candidates: Vec<GoogleCandidate>,
}

/// Individual completion candidate
#[derive(Deserialize)]
struct GoogleCandidate {
    /// Content of the candidate response
    content: GoogleResponseContent,
}

/// Content block within a response
#[derive(Deserialize)]
struct GoogleResponseContent {
    /// Parts making up the content
    parts: Vec<GoogleResponsePart>,
}

/// Individual part of response content
#[derive(Deserialize)]
struct GoogleResponsePart {
    /// Text content of this part
    text: String,
}

impl Google {
    /// Creates a new Google Gemini client with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Google API key for authentication
    /// * `model` - Model identifier (defaults to "gemini-1.5-flash")
    /// * `temperature` - Sampling temperature between 0.0 and 1.0
    /// * `timeout_seconds` - Request timeout in seconds
    ///
    /// # Returns
    ///
    /// A new `Google` client instance
    pub fn new(
        api_key: impl Into<String>,
        model: Option<String>,
        temperature: Option<f32>,
        timeout_seconds: Option<u64>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.unwrap_or_else(|| "gemini-1.5-flash".to_string()),
            temperature,
            timeout_seconds,
            client: Client::builder()
                .build()
                .expect("Failed to build reqwest Client"),
        }
    }

    /// Serializable request body for the given completion request.
    fn request_body<'a>(&'a self, req: &'a CompletionRequest) -> GoogleGenerateRequest<'a> {
        let temperature = req.temperature.or(self.temperature);

        // Omit generation_config entirely when empty to avoid validation errors
        let generation_config = if req.max_tokens.is_none() && temperature.is_none() {
            None
        } else {
            Some(GoogleGenerationConfig {
                max_output_tokens: req.max_tokens,
                temperature,
            })
        };

        GoogleGenerateRequest {
            contents: vec![GoogleContent {
                role: "user",
                parts: vec![GoogleContentPart { text: &req.prompt }],
            }],
            generation_config,
        }
    }
}

#[async_trait]
impl CompletionProvider for Google {
    /// Sends a completion request to Google's Gemini API.
    ///
    /// # Arguments
    ///
    /// * `req` - Completion request parameters
    ///
    /// # Returns
    ///
    /// The model's response text or an error
    async fn complete(&self, req: &CompletionRequest) -> Result<CompletionResponse, SentimentError> {
        if self.api_key.is_empty() {
            return Err(SentimentError::ConfigError(
                "Missing Google API key".to_string(),
            ));
        }

        let req_body = self.request_body(req);

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent?key={key}",
            model = self.model,
            key = self.api_key
        );

        let mut request = self.client.post(&url).json(&req_body);

        if let Some(timeout) = self.timeout_seconds {
            request = request.timeout(std::time::Duration::from_secs(timeout));
        }

        let resp = request.send().await?.error_for_status()?;

        let json_resp: GoogleGenerateResponse = resp.json().await?;
        let first_candidate = json_resp.candidates.into_iter().next().ok_or_else(|| {
            SentimentError::ProviderError("No candidates returned by Google".to_string())
        })?;

        let response_text = first_candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");

        Ok(CompletionResponse {
            text: response_text,
        })
    }
}
