//! Summary generation over the enriched source set.

use std::sync::Arc;

use tracing::warn;

use crate::llm::LanguageModel;
use crate::types::Source;

const SYSTEM_PROMPT: &str =
    "You are a research assistant that creates clear, concise summaries from multiple sources.";

/// Marker separating the summary body from the bullet list in replies.
const KEY_POINTS_MARKER: &str = "KEY_POINTS:";

/// Label stripped from the summary section.
const SUMMARY_LABEL: &str = "SUMMARY:";

/// Builds the summarization prompt, dispatches to the configured language
/// model, and parses the reply into a summary plus key points.
pub struct Summarizer {
    model: Arc<dyn LanguageModel>,
}

impl Summarizer {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Summarize the enriched sources for the query.
    ///
    /// Never fails the pipeline: a backend error degrades to a sentinel
    /// summary with no key points.
    pub async fn summarize(&self, query: &str, sources: &[Source]) -> (String, Vec<String>) {
        let prompt = build_prompt(query, sources);

        match self.model.generate(SYSTEM_PROMPT, &prompt).await {
            Ok(reply) => parse_reply(&reply),
            Err(e) => {
                warn!(error = %e, "summary generation failed");
                (format!("Summary generation failed: {}", e), Vec::new())
            }
        }
    }
}

/// Assemble the prompt: the query, then each source's title and content
/// numbered in order, then the fixed format instructions.
fn build_prompt(query: &str, sources: &[Source]) -> String {
    let mut content_text = String::new();
    for (i, source) in sources.iter().enumerate() {
        let content = source.content.as_deref().unwrap_or("");
        content_text.push_str(&format!(
            "\nSource {} ({}):\n{}\n",
            i + 1,
            source.title,
            content
        ));
    }

    format!(
        "Research Query: {query}

Content from sources:
{content_text}

Please provide:
1. A comprehensive summary (2-3 paragraphs) of the key information related to the query
2. A list of 4-6 key points (each point should be one clear sentence)

Format your response as:
SUMMARY:
[Your summary here]

KEY_POINTS:
- [Point 1]
- [Point 2]
- [Point 3]
- [Point 4]"
    )
}

/// Split a raw reply into (summary, key_points).
///
/// The reply format is a contract with the prompt template: free text under
/// a SUMMARY: label, then the KEY_POINTS: marker followed by hyphen-prefixed
/// lines. A reply that strays from the template degrades to "everything is
/// summary, no key points" rather than failing.
fn parse_reply(reply: &str) -> (String, Vec<String>) {
    let (summary_part, points_part) = match reply.split_once(KEY_POINTS_MARKER) {
        Some((before, after)) => (before, Some(after)),
        None => (reply, None),
    };

    let summary = summary_part.replace(SUMMARY_LABEL, "").trim().to_string();

    let key_points = points_part
        .map(|text| {
            text.lines()
                .filter(|line| line.trim().starts_with('-'))
                .map(|line| {
                    line.trim_matches(|c: char| c == '-' || c.is_whitespace())
                        .to_string()
                })
                .collect()
        })
        .unwrap_or_default();

    (summary, key_points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reply_with_marker() {
        let reply = "SUMMARY:\nFoo bar.\nKEY_POINTS:\n- A\n- B";
        let (summary, key_points) = parse_reply(reply);

        assert_eq!(summary, "Foo bar.");
        assert_eq!(key_points, vec!["A", "B"]);
    }

    #[test]
    fn test_parse_reply_without_marker() {
        let reply = "  Just a plain paragraph with no structure.  ";
        let (summary, key_points) = parse_reply(reply);

        assert_eq!(summary, "Just a plain paragraph with no structure.");
        assert!(key_points.is_empty());
    }

    #[test]
    fn test_parse_reply_ignores_non_bullet_lines() {
        let reply = "SUMMARY:\nBody.\nKEY_POINTS:\nHere are the points:\n- First point\nstray text\n  - Indented point";
        let (summary, key_points) = parse_reply(reply);

        assert_eq!(summary, "Body.");
        assert_eq!(key_points, vec!["First point", "Indented point"]);
    }

    #[test]
    fn test_build_prompt_numbers_sources_in_order() {
        let sources = vec![
            Source::new("First", "https://a.example", "sa").with_content("alpha content"),
            Source::new("Second", "https://b.example", "sb").with_content("beta content"),
        ];
        let prompt = build_prompt("test query", &sources);

        assert!(prompt.contains("Research Query: test query"));
        assert!(prompt.contains("Source 1 (First):\nalpha content"));
        assert!(prompt.contains("Source 2 (Second):\nbeta content"));
        assert!(prompt.find("Source 1").unwrap() < prompt.find("Source 2").unwrap());
    }
}
