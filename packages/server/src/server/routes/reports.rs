//! Read endpoints for persisted reports.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::server::app::AppState;

/// Main page: all reports, newest first.
pub async fn index_handler(State(state): State<AppState>) -> Response {
    list_reports(&state).await
}

/// API endpoint returning all reports.
pub async fn api_reports_handler(State(state): State<AppState>) -> Response {
    list_reports(&state).await
}

async fn list_reports(state: &AppState) -> Response {
    match state.store.list().await {
        Ok(reports) => Json(reports).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to list reports");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to load reports" })),
            )
                .into_response()
        }
    }
}

/// View a specific report.
pub async fn view_report_handler(
    State(state): State<AppState>,
    Path(report_id): Path<i64>,
) -> Response {
    match state.store.get(report_id).await {
        Ok(Some(report)) => Json(report).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Report not found").into_response(),
        Err(e) => {
            tracing::error!(error = %e, report_id, "failed to load report");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to load report" })),
            )
                .into_response()
        }
    }
}
