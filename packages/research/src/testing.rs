//! Mock implementations for tests.

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;

use crate::error::{LlmError, SearchError};
use crate::extract::Extractor;
use crate::llm::LanguageModel;
use crate::search::WebSearcher;
use crate::types::Source;

/// Mock searcher returning canned results per query.
#[derive(Default)]
pub struct MockWebSearcher {
    results: RwLock<HashMap<String, Vec<Source>>>,
    fail: bool,
}

impl MockWebSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add results for a query.
    pub fn with_results(self, query: &str, results: Vec<Source>) -> Self {
        self.results
            .write()
            .unwrap()
            .insert(query.to_string(), results);
        self
    }

    /// A searcher whose every call fails at the provider.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl WebSearcher for MockWebSearcher {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<Source>, SearchError> {
        if self.fail {
            return Err(SearchError::Provider {
                status: 500,
                body: "mock provider down".to_string(),
            });
        }

        let mut results = self
            .results
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default();
        results.truncate(max_results);
        Ok(results)
    }
}

/// Mock extractor returning canned content per URL; unknown URLs fail.
#[derive(Default)]
pub struct MockExtractor {
    content: RwLock<HashMap<String, String>>,
}

impl MockExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add content for a URL.
    pub fn with_content(self, url: &str, content: &str) -> Self {
        self.content
            .write()
            .unwrap()
            .insert(url.to_string(), content.to_string());
        self
    }
}

#[async_trait]
impl Extractor for MockExtractor {
    async fn extract(&self, url: &str) -> Option<String> {
        self.content.read().unwrap().get(url).cloned()
    }
}

/// Mock language model returning a canned reply, recording user prompts.
pub struct MockLanguageModel {
    reply: String,
    fail: bool,
    prompts: Mutex<Vec<String>>,
}

impl MockLanguageModel {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            fail: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A model whose every call fails.
    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            fail: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// User prompts seen so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for MockLanguageModel {
    async fn generate(&self, _system: &str, user: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(user.to_string());

        if self.fail {
            return Err(LlmError::Provider {
                status: 500,
                body: "mock backend down".to_string(),
            });
        }

        Ok(self.reply.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_searcher_truncates_to_max_results() {
        let searcher = MockWebSearcher::new().with_results(
            "q",
            vec![
                Source::new("a", "https://a.example", ""),
                Source::new("b", "https://b.example", ""),
                Source::new("c", "https://c.example", ""),
                Source::new("d", "https://d.example", ""),
            ],
        );

        let results = searcher.search("q", 2).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "a");
    }

    #[tokio::test]
    async fn test_mock_extractor_unknown_url_is_absent() {
        let extractor = MockExtractor::new().with_content("https://a.example", "text");

        assert_eq!(
            extractor.extract("https://a.example").await.as_deref(),
            Some("text")
        );
        assert!(extractor.extract("https://b.example").await.is_none());
    }
}
