//! JSON extraction ladder for model output.
//!
//! The model sometimes wraps valid JSON in prose or code fences. Strategies run from
//! strict to lenient and the first one that parses wins:
//! 1. direct parse
//! 2. parse after stripping ``` / ```json fences
//! 3. parse the first `{` .. last `}` substring
//! 4. parse the first `[` .. last `]` substring
//!
//! Direct parse must stay first: a well-formed object whose string values contain
//! braces would be corrupted by the substring strategies.

use serde_json::Value;
use thiserror::Error;

/// Max characters of offending text kept for diagnostics.
pub const PREFIX_LIMIT: usize = 200;

#[derive(Debug, Error, PartialEq)]
pub enum ExtractionError {
    #[error("no parseable JSON in model output (starts with: {prefix:?})")]
    NotFound { prefix: String },
}

pub fn extract_json(text: &str) -> Result<Value, ExtractionError> {
    if let Ok(value) = serde_json::from_str(text) {
        return Ok(value);
    }

    let cleaned = strip_json_fences(text);
    if let Ok(value) = serde_json::from_str(&cleaned) {
        return Ok(value);
    }

    if let Some(value) = parse_between(&cleaned, '{', '}') {
        return Ok(value);
    }

    if let Some(value) = parse_between(&cleaned, '[', ']') {
        return Ok(value);
    }

    Err(ExtractionError::NotFound {
        prefix: bounded_prefix(text),
    })
}

/// Removes every ```json and ``` marker and trims surrounding whitespace.
fn strip_json_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parses the substring from the first `open` to the last `close`, inclusive.
fn parse_between(text: &str, open: char, close: char) -> Option<Value> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

pub fn bounded_prefix(text: &str) -> String {
    text.chars().take(PREFIX_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_json_parses_unchanged() {
        let text = r#"{"score": 85, "summary": "Strong", "strengths": ["Leadership"]}"#;
        let expected: Value = serde_json::from_str(text).unwrap();
        assert_eq!(extract_json(text).unwrap(), expected);
    }

    #[test]
    fn test_direct_parse_wins_over_brace_substring() {
        // Braces inside a string value must survive untouched.
        let text = r#"{"summary": "uses {templating} and }{ odd braces", "n": 1}"#;
        assert_eq!(
            extract_json(text).unwrap(),
            json!({ "summary": "uses {templating} and }{ odd braces", "n": 1 })
        );
    }

    #[test]
    fn test_json_tagged_fence_is_stripped() {
        let text = "```json\n{\"score\":5}\n```";
        assert_eq!(extract_json(text).unwrap(), json!({ "score": 5 }));
    }

    #[test]
    fn test_untagged_fence_is_stripped() {
        let text = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_json(text).unwrap(), json!({ "key": "value" }));
    }

    #[test]
    fn test_object_inside_prose() {
        let text = r#"Sure, here is the result: {"a":1} Thanks"#;
        assert_eq!(extract_json(text).unwrap(), json!({ "a": 1 }));
    }

    #[test]
    fn test_fenced_object_inside_prose() {
        let text = "Here you go:\n```json\n{\"companyName\": \"Acme\"}\n```\nLet me know!";
        assert_eq!(extract_json(text).unwrap(), json!({ "companyName": "Acme" }));
    }

    #[test]
    fn test_array_inside_prose() {
        let text = r#"The list: ["a", "b"] as requested"#;
        assert_eq!(extract_json(text).unwrap(), json!(["a", "b"]));
    }

    #[test]
    fn test_no_json_fails_with_prefix() {
        let err = extract_json("I cannot help with that request.").unwrap_err();
        assert_eq!(
            err,
            ExtractionError::NotFound {
                prefix: "I cannot help with that request.".to_string()
            }
        );
    }

    #[test]
    fn test_broken_braces_fail() {
        assert!(extract_json("} nothing here {").is_err());
        assert!(extract_json("{ not: json at all }").is_err());
    }

    #[test]
    fn test_prefix_is_bounded() {
        let long = "x".repeat(PREFIX_LIMIT * 3);
        let ExtractionError::NotFound { prefix } = extract_json(&long).unwrap_err();
        assert_eq!(prefix.chars().count(), PREFIX_LIMIT);
    }
}
