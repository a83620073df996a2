//! Sentiment record types.
//!
//! The pipeline itself accepts any well-formed JSON array from the model and
//! persists it as-is. These types are the optional structured view for callers
//! that want field access instead of raw [`serde_json::Value`]s.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SentimentError;

/// Sentiment classification of a single text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Structured per-text result produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    /// The analyzed input text
    pub text: String,
    /// Sentiment classification
    pub sentiment: Sentiment,
    /// Model's explanation for the classification
    pub reasoning: String,
    /// Model's self-reported confidence in [0.0, 1.0]
    pub reliability: f64,
}

impl SentimentRecord {
    /// Converts decoded JSON values into typed records.
    ///
    /// This is an opt-in view; the pipeline does not require the model output
    /// to conform to it.
    pub fn parse_records(values: &[Value]) -> Result<Vec<SentimentRecord>, SentimentError> {
        values
            .iter()
            .map(|value| {
                serde_json::from_value(value.clone()).map_err(|err| SentimentError::DecodeError {
                    message: err.to_string(),
                    raw_output: value.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_well_formed_records() {
        let values = vec![json!({
            "text": "Great service!",
            "sentiment": "Positive",
            "reasoning": "\"Great\" is strongly positive.",
            "reliability": 0.95
        })];

        let records = SentimentRecord::parse_records(&values).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "Great service!");
        assert_eq!(records[0].sentiment, Sentiment::Positive);
        assert_eq!(records[0].reliability, 0.95);
    }

    #[test]
    fn unknown_sentiment_is_rejected_by_typed_view() {
        let values = vec![json!({
            "text": "hm",
            "sentiment": "Ambivalent",
            "reasoning": "",
            "reliability": 0.1
        })];

        assert!(matches!(
            SentimentRecord::parse_records(&values),
            Err(SentimentError::DecodeError { .. })
        ));
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = SentimentRecord {
            text: "Meh.".to_string(),
            sentiment: Sentiment::Neutral,
            reasoning: "No strong signal either way.".to_string(),
            reliability: 0.6,
        };

        let encoded = serde_json::to_string(&record).unwrap();
        let decoded: SentimentRecord = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, record);
    }
}
