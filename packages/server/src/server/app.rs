//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use research::{
    HttpExtractor, LanguageModel, OllamaModel, OpenAiModel, ReportStore, ResearchPipeline,
    Summarizer, TavilySearcher,
};

use crate::config::{Config, LlmProvider};
use crate::server::routes::{
    api_reports_handler, health_handler, index_handler, research_handler, view_report_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ResearchPipeline>,
    pub store: Arc<ReportStore>,
}

/// Build the Axum application router.
///
/// Constructs the pipeline components once and shares them across requests;
/// the LLM backend is selected here based on configuration.
pub fn build_app(config: &Config, store: Arc<ReportStore>) -> Router {
    let model: Arc<dyn LanguageModel> = match config.llm_provider {
        LlmProvider::OpenAi => {
            let api_key = config
                .openai_api_key
                .clone()
                .expect("OPENAI_API_KEY presence is checked at configuration load");
            Arc::new(
                OpenAiModel::new(api_key)
                    .with_model(&config.openai_model)
                    .with_base_url(&config.openai_base_url),
            )
        }
        LlmProvider::Ollama => Arc::new(
            OllamaModel::new()
                .with_base_url(&config.ollama_base_url)
                .with_model(&config.ollama_model),
        ),
    };

    let pipeline = Arc::new(ResearchPipeline::new(
        Arc::new(TavilySearcher::new(config.tavily_api_key.clone())),
        Arc::new(HttpExtractor::new()),
        Summarizer::new(model),
        store.clone(),
    ));

    let state = AppState { pipeline, store };

    // CORS: the web frontend runs as a separate service.
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(index_handler))
        .route("/research", post(research_handler))
        .route("/report/:id", get(view_report_handler))
        .route("/api/reports", get(api_reports_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
