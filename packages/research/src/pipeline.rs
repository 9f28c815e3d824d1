//! The research pipeline: search, extract, summarize, persist.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{ResearchError, Result};
use crate::extract::Extractor;
use crate::search::WebSearcher;
use crate::store::ReportStore;
use crate::summarize::Summarizer;
use crate::types::{truncate_chars, Report, MAX_CONTENT_CHARS};

/// Fan-out limit for source search.
const MAX_SOURCES: usize = 3;

/// Placeholder attached to sources whose extraction produced nothing.
/// Keeps the pipeline shape stable through summarization: a failed source
/// still participates, it just dilutes the prompt.
const EXTRACTION_FAILED: &str = "Content extraction failed";

/// Sequences search, extraction, summarization and persistence for one
/// research request. Linear, no branching back.
pub struct ResearchPipeline {
    searcher: Arc<dyn WebSearcher>,
    extractor: Arc<dyn Extractor>,
    summarizer: Summarizer,
    store: Arc<ReportStore>,
}

impl ResearchPipeline {
    pub fn new(
        searcher: Arc<dyn WebSearcher>,
        extractor: Arc<dyn Extractor>,
        summarizer: Summarizer,
        store: Arc<ReportStore>,
    ) -> Self {
        Self {
            searcher,
            extractor,
            summarizer,
            store,
        }
    }

    /// Run the full pipeline for one query.
    ///
    /// Always returns a structured result. Only two failures are terminal:
    /// an empty search result set and a storage fault; everything else is
    /// recovered into sentinel or degraded values along the way.
    pub async fn research(&self, query: &str) -> Result<Report> {
        info!(query = %query, "searching for sources");
        let sources = match self.searcher.search(query, MAX_SOURCES).await {
            Ok(sources) => sources,
            Err(e) => {
                // Provider errors read as "nothing found"; the terminal
                // no-sources state below covers both.
                warn!(error = %e, "source search failed");
                Vec::new()
            }
        };

        if sources.is_empty() {
            return Err(ResearchError::NoSources);
        }

        info!(count = sources.len(), "extracting content from sources");
        let mut enriched = Vec::with_capacity(sources.len());
        for source in sources {
            let content = match self.extractor.extract(&source.url).await {
                Some(text) => truncate_chars(&text, MAX_CONTENT_CHARS),
                None => EXTRACTION_FAILED.to_string(),
            };
            enriched.push(source.with_content(content));
        }

        info!("generating summary");
        let (summary, key_points) = self.summarizer.summarize(query, &enriched).await;

        let report = self
            .store
            .save(query, &enriched, &summary, &key_points)
            .await?;
        info!(report_id = report.id, "report saved");

        Ok(report)
    }
}
