//! Core data types: sources and reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum characters of extracted content carried per source.
///
/// Bounds the summarization prompt size. Truncation is silent and lossy and
/// may cut mid-word; downstream stages must not assume whole sentences.
pub const MAX_CONTENT_CHARS: usize = 2000;

/// One search hit, optionally enriched with extracted page text.
///
/// Fresh from the searcher, `content` is absent. The pipeline's extraction
/// stage attaches it (or a sentinel placeholder when extraction fails).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
    pub snippet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Source {
    /// Create a bare search hit with no extracted content.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
            content: None,
        }
    }

    /// Attach extracted content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// A persisted research result.
///
/// Reports are immutable once created: the store exposes create and read
/// only, and `id` is assigned by the store (unique, monotonically
/// increasing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub query: String,
    pub sources: Vec<Source>,
    pub summary: String,
    pub key_points: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Truncate to at most `max` characters. Counts characters, not bytes;
/// slicing bytes could split a multibyte character and panic.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_builder() {
        let source = Source::new("Title", "https://example.com", "a snippet");
        assert!(source.content.is_none());

        let enriched = source.with_content("body text");
        assert_eq!(enriched.content.as_deref(), Some("body text"));
    }

    #[test]
    fn test_source_round_trips_through_json() {
        let source = Source::new("T", "https://example.com", "s").with_content("c");
        let json = serde_json::to_string(&source).unwrap();
        let back: Source = serde_json::from_str(&json).unwrap();
        assert_eq!(back, source);

        // Absent content stays absent through a round trip.
        let bare = Source::new("T", "https://example.com", "s");
        let json = serde_json::to_string(&bare).unwrap();
        assert!(!json.contains("content"));
        let back: Source = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bare);
    }

    #[test]
    fn test_truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        // Multibyte characters count as one each.
        let text = "é".repeat(2100);
        assert_eq!(truncate_chars(&text, 2000).chars().count(), 2000);
    }
}
