//! Search provider boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::types::Source;

/// Web search over an external provider.
///
/// Implementations return at most `max_results` sources in the provider's
/// relevance order, with no extracted content attached yet.
#[async_trait]
pub trait WebSearcher: Send + Sync {
    async fn search(&self, query: &str, max_results: usize)
        -> Result<Vec<Source>, SearchError>;
}

/// Tavily API client for web search.
pub struct TavilySearcher {
    api_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct TavilyRequest {
    query: String,
    search_depth: String,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    results: Vec<TavilyResult>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    title: Option<String>,
    url: Option<String>,
    content: Option<String>,
}

impl TavilySearcher {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl WebSearcher for TavilySearcher {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<Source>, SearchError> {
        let request = TavilyRequest {
            query: query.to_string(),
            search_depth: "advanced".to_string(),
            max_results,
        };

        let response = self
            .client
            .post("https://api.tavily.com/search")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| SearchError::Http(Box::new(e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Provider { status, body });
        }

        let tavily_response: TavilyResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Http(Box::new(e)))?;

        let sources = tavily_response
            .results
            .into_iter()
            .map(|r| {
                Source::new(
                    r.title.unwrap_or_else(|| "No Title".to_string()),
                    r.url.unwrap_or_default(),
                    r.content.unwrap_or_default(),
                )
            })
            .collect();

        Ok(sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_mapping_fills_missing_fields() {
        let raw = r#"{"results":[
            {"title":"Rust Book","url":"https://doc.rust-lang.org/book/","content":"The book."},
            {"url":"https://example.com"}
        ]}"#;
        let parsed: TavilyResponse = serde_json::from_str(raw).unwrap();
        let sources: Vec<Source> = parsed
            .results
            .into_iter()
            .map(|r| {
                Source::new(
                    r.title.unwrap_or_else(|| "No Title".to_string()),
                    r.url.unwrap_or_default(),
                    r.content.unwrap_or_default(),
                )
            })
            .collect();

        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].title, "Rust Book");
        assert_eq!(sources[1].title, "No Title");
        assert_eq!(sources[1].snippet, "");
    }
}
