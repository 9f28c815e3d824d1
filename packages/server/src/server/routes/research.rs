//! The research submission endpoint.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
    #[serde(default)]
    pub query: String,
}

/// Handle a research request.
///
/// Runs the whole pipeline synchronously within the request; on success,
/// browser callers get a redirect to the report page while AJAX callers
/// (`X-Requested-With: XMLHttpRequest`) get the redirect target as JSON.
pub async fn research_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(request): Form<ResearchRequest>,
) -> Response {
    let query = request.query.trim();

    if query.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Query is required" })),
        )
            .into_response();
    }

    let report = match state.pipeline.research(query).await {
        Ok(report) => report,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    let location = format!("/report/{}", report.id);

    let is_xhr = headers
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("xmlhttprequest"));

    if is_xhr {
        Json(json!({ "redirect": location })).into_response()
    } else {
        Redirect::to(&location).into_response()
    }
}
