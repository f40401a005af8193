//! HTTP handlers for the ranking endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::errors::AppError;
use crate::models::ranking::{Candidate, Job, RankedCandidate};
use crate::state::AppState;

/// POST /api/v1/rank request body.
#[derive(Debug, Deserialize)]
pub struct RankingRequest {
    pub job: Job,
    pub candidates: Vec<Candidate>,
}

/// POST /api/v1/rank response body.
#[derive(Debug, Serialize)]
pub struct RankingResponse {
    pub ranked_candidates: Vec<RankedCandidate>,
    pub scorer_backend: String, // "heuristic" — for transparency
}

/// POST /api/v1/rank — scores and orders a batch of candidates for a job.
///
/// The body is extracted as a `Result` so malformed payloads map to our own
/// 400 envelope (with serde's position info) instead of Axum's default.
pub async fn handle_rank(
    State(state): State<AppState>,
    payload: Result<Json<RankingRequest>, JsonRejection>,
) -> Result<Json<RankingResponse>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    info!(
        "Ranking {} candidates for job: {}",
        request.candidates.len(),
        request.job.title
    );

    let ranked_candidates = state.ranker.rank(&request.job, &request.candidates)?;

    Ok(Json(RankingResponse {
        ranked_candidates,
        scorer_backend: state.ranker.backend().to_string(),
    }))
}

/// GET /api/v1/scorer — reports which backend is active and how it is configured.
pub async fn handle_scorer_info(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "backend": state.ranker.backend(),
        "perturbation": state.ranker.perturbation().label(),
        "detail": state.ranker.backend_info(),
    }))
}
