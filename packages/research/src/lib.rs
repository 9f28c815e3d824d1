//! Query-driven research pipeline.
//!
//! Given a natural-language query, the pipeline discovers candidate sources
//! through a web search provider, fetches and extracts readable text from
//! each one (HTML or PDF), asks a language model for a summary with key
//! points, and persists the finished report in SQLite.
//!
//! # Design
//!
//! The library handles mechanics; the app handles wiring. External services
//! sit behind trait seams (`WebSearcher`, `Extractor`, `LanguageModel`) so
//! the pipeline can be exercised without the network, and failures are
//! recovered as close to their origin as possible: a source that fails to
//! extract carries a sentinel placeholder, a backend that fails to summarize
//! degrades to a sentinel summary. Only "nothing to research" and storage
//! faults terminate a request.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use research::{
//!     HttpExtractor, OpenAiModel, ReportStore, ResearchPipeline, Summarizer, TavilySearcher,
//! };
//!
//! let store = Arc::new(ReportStore::new("sqlite:reports.db?mode=rwc").await?);
//! let pipeline = ResearchPipeline::new(
//!     Arc::new(TavilySearcher::new(tavily_key)),
//!     Arc::new(HttpExtractor::new()),
//!     Summarizer::new(Arc::new(OpenAiModel::new(openai_key))),
//!     store,
//! );
//!
//! let report = pipeline.research("rust async runtimes compared").await?;
//! println!("{}: {} key points", report.summary, report.key_points.len());
//! ```

pub mod error;
pub mod extract;
pub mod llm;
pub mod pipeline;
pub mod search;
pub mod store;
pub mod summarize;
pub mod testing;
pub mod types;

pub use error::{LlmError, ResearchError, SearchError, StorageError};
pub use extract::{Extractor, HttpExtractor};
pub use llm::{LanguageModel, OllamaModel, OpenAiModel};
pub use pipeline::ResearchPipeline;
pub use search::{TavilySearcher, WebSearcher};
pub use store::ReportStore;
pub use summarize::Summarizer;
pub use types::{Report, Source};
