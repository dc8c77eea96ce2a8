//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{ApiResponse, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::{DistributionReport, ScoreLookup, SubjectStatistics, TopEntry};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running and the dataset
/// backend is accessible.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Json(HealthResponse {
        success: true,
        message: "API is running".to_string(),
        database,
        timestamp: chrono::Utc::now(),
    })
}

/// GET /api/scores/check/{sbd}
///
/// Look up one student's scores by registration number.
pub async fn check_score(
    State(state): State<AppState>,
    Path(sbd): Path<String>,
) -> HandlerResult<ScoreLookup> {
    let result = services::check_score(state.repository.as_ref(), &sbd).await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// GET /api/scores/report/{subject}
///
/// Four-level distribution report for a subject.
pub async fn score_report(
    State(state): State<AppState>,
    Path(subject): Path<String>,
) -> HandlerResult<DistributionReport> {
    let report = services::score_report(state.repository.as_ref(), &subject).await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// GET /api/scores/statistics/{subject}
///
/// Descriptive statistics for a subject.
pub async fn subject_statistics(
    State(state): State<AppState>,
    Path(subject): Path<String>,
) -> HandlerResult<SubjectStatistics> {
    let statistics =
        services::subject_statistics(state.repository.as_ref(), &state.cache, &subject).await?;
    Ok(Json(ApiResponse::ok(statistics)))
}

/// GET /api/scores/top10/group-a
///
/// Top 10 students by Group A composite (math, physics, chemistry).
pub async fn top10_group_a(State(state): State<AppState>) -> HandlerResult<Vec<TopEntry>> {
    let entries = services::top10_group_a(state.repository.as_ref(), &state.cache).await?;
    Ok(Json(ApiResponse::ok(entries)))
}
