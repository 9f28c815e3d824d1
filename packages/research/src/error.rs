//! Typed errors for the research pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to keep failure modes
//! composable and matchable by callers.

use thiserror::Error;

/// Errors at the search provider boundary.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport-level failure before a provider reply was obtained.
    #[error("search request failed: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The provider replied with a non-success status.
    #[error("search provider error {status}: {body}")]
    Provider { status: u16, body: String },
}

/// Errors at the language-model provider boundary.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport-level failure before a provider reply was obtained.
    #[error("LLM request failed: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The provider replied with a non-success status.
    #[error("LLM provider error {status}: {body}")]
    Provider { status: u16, body: String },

    /// The provider replied without any completion choice.
    #[error("empty completion from LLM provider")]
    EmptyCompletion,
}

/// Errors from the report store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A JSON column failed to encode or decode.
    #[error("corrupt report record: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored timestamp was not valid RFC 3339.
    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

/// Terminal pipeline outcomes surfaced to callers.
///
/// The `Display` strings are the user-visible error messages; route handlers
/// pass them through verbatim.
#[derive(Debug, Error)]
pub enum ResearchError {
    /// Search produced nothing to work with. A first-class terminal state,
    /// not a fault: provider errors are also folded into this.
    #[error("No sources found for the query")]
    NoSources,

    /// Persisting the finished report failed.
    #[error("Research failed: {0}")]
    Storage(#[from] StorageError),
}

/// Result alias for whole-pipeline operations.
pub type Result<T> = std::result::Result<T, ResearchError>;
