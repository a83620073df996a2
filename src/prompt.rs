//! Prompt construction.
//!
//! The prompt asks for a JSON array only, one item per input text, in input
//! order, with a fixed per-item structure. The input texts are embedded as a
//! JSON-encoded array so no manual escaping is needed.

/// Builds the batched sentiment-analysis instruction for the given texts.
///
/// Pure function: the output always contains the JSON-encoded form of `texts`
/// verbatim as a substring.
pub fn build_prompt(texts: &[String]) -> String {
    let encoded = serde_json::to_string(texts).expect("string array serialization is infallible");
    format!(
        r#"You are an advanced linguistic sentiment analysis expert.

Analyze the sentiment of the following texts.

Return ONLY a valid JSON array.
Do not add explanations outside JSON.
Keep the same order of input texts.

Each item must follow this exact structure:

{{
"text": "...",
"sentiment": "Positive | Negative | Neutral",
"reasoning": "Detailed analytical explanation explaining why the sentiment was chosen.
Mention specific words or phrases from the text that influenced the decision.
If the sentence contains mixed signals, explain which side is stronger and why.",
"reliability": 0.0
}}

Texts:
{encoded}
"#
    )
}
