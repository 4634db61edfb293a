//! API request handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::analysis::{AnalysisReport, EmailAnalyzer};

/// Shared application state
pub struct AppState {
    pub analyzer: EmailAnalyzer,
}

/// Request to analyze a draft; the subject is optional
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub subject: String,
    pub body: String,
}

/// Analysis response envelope
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub subject: String,
    pub result: AnalysisReport,
}

/// Response with error details
#[derive(Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

/// POST /api/analyze - Score a draft before sending
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ApiError>)> {
    let Json(req) = payload.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(&format!("Invalid request: {}", e))),
        )
    })?;

    info!(
        "Analyzing draft (subject: {} chars, body: {} chars)",
        req.subject.len(),
        req.body.len()
    );

    let result = state.analyzer.analyze(&req.subject, &req.body);

    Ok(Json(AnalyzeResponse {
        subject: req.subject,
        result,
    }))
}

/// GET /api/health - Liveness check
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "warmup-rs",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
