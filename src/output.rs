//! Output file writing.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::SentimentError;

/// Serializes the decoded array as pretty-printed UTF-8 JSON to `path`,
/// overwriting any existing file.
///
/// Non-ASCII characters are written literally, not escaped.
pub fn save_json(values: &[Value], path: &Path) -> Result<(), SentimentError> {
    let pretty = serde_json::to_string_pretty(values)
        .map_err(|err| SentimentError::IoError(err.to_string()))?;
    fs::write(path, pretty)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trips_losslessly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let values = vec![json!({
            "text": "ok",
            "sentiment": "Positive",
            "reasoning": "x",
            "reliability": 0.9
        })];

        save_json(&values, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let decoded: Vec<Value> = serde_json::from_str(&written).unwrap();
        assert_eq!(decoded, values);
    }

    #[test]
    fn non_ascii_is_written_literally() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let values = vec![json!({"text": "Très bon café"})];

        save_json(&values, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Très bon café"));
        assert!(!written.contains("\\u"));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "stale contents").unwrap();

        save_json(&[json!(1)], &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale"));
        assert_eq!(written.trim_start().chars().next(), Some('['));
    }

    #[test]
    fn output_is_indented() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        save_json(&[json!({"a": 1})], &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  "));
    }
}
