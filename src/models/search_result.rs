// file: src/models/search_result.rs
// description: search result model with snippet truncation
// reference: formatted per-request from raw engine hits

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Snippet length cap, counted in characters rather than bytes so
/// multi-byte content cannot split a code point.
pub const SNIPPET_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
        }
    }

    /// Build a result from a raw hit `_source` object. Missing fields
    /// default to the empty string; the snippet is a plain character
    /// truncation with no ellipsis or word-boundary handling.
    pub fn from_source(source: &Value) -> Self {
        let title = source
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let content = source
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or_default();

        Self {
            title: title.to_string(),
            snippet: truncate_chars(content, SNIPPET_MAX_CHARS),
        }
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
