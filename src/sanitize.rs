//! Markdown fence stripping and JSON-array span extraction.
//!
//! Models asked for "JSON only" still routinely wrap their reply in markdown
//! code fences or surround it with prose. Sanitization removes the literal
//! fence markers, then extracts the greedy first-`[`-to-last-`]` span. This is
//! a best-effort heuristic, not a bracket matcher: it assumes the response
//! contains exactly one JSON array. A response with multiple independent
//! arrays is extracted as one span covering all of them.

use std::sync::OnceLock;

use regex::Regex;

fn fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // "```json" must come first in the alternation so the tag is removed
    // together with its fence
    RE.get_or_init(|| Regex::new(r"```json|```").expect("valid regex"))
}

fn array_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\[.*\]").expect("valid regex"))
}

/// Strips markdown fence markers and extracts the JSON-array span.
///
/// Removes every literal ```` ```json ```` and ```` ``` ```` token, then
/// returns the greedy `[` ... `]` match (dot matches newlines). If no such
/// span exists, returns the whitespace-trimmed input unchanged.
pub fn clean_json_output(text: &str) -> String {
    let stripped = fence_re().replace_all(text, "");

    match array_re().find(&stripped) {
        Some(found) => found.as_str().to_string(),
        None => stripped.trim().to_string(),
    }
}
