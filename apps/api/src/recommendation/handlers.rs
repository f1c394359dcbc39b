//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::recommendation::Recommendation;
use crate::recommendation::generator::recommendation_for;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecommendationRequest {
    pub assessment_id: Uuid,
}

/// POST /api/recommendations
///
/// Generates (or returns the cached) recommendation for a stored assessment.
pub async fn handle_generate_recommendation(
    State(state): State<AppState>,
    body: Result<Json<GenerateRecommendationRequest>, JsonRejection>,
) -> Result<Json<Recommendation>, AppError> {
    let Json(request) = body?;

    let assessment = state
        .storage
        .get_assessment(request.assessment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Assessment not found".to_string()))?;

    let recommendation =
        recommendation_for(state.storage.as_ref(), state.recommender.as_ref(), &assessment)
            .await?;
    Ok(Json(recommendation))
}

/// GET /api/recommendations/:id
pub async fn handle_get_recommendation(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Recommendation>, AppError> {
    let Path(id) = path?;
    state
        .storage
        .get_recommendation(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Recommendation not found".to_string()))
}

/// GET /api/recommendations/assessment/:assessment_id
pub async fn handle_get_recommendation_by_assessment(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Recommendation>, AppError> {
    let Path(assessment_id) = path?;
    state
        .storage
        .get_recommendation_by_assessment(assessment_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Recommendation not found".to_string()))
}
