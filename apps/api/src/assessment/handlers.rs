use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::assessment::validation::validate_assessment;
use crate::errors::AppError;
use crate::models::assessment::{Assessment, NewAssessment};
use crate::state::AppState;

/// POST /api/assessments
pub async fn handle_create_assessment(
    State(state): State<AppState>,
    body: Result<Json<NewAssessment>, JsonRejection>,
) -> Result<Json<Assessment>, AppError> {
    let Json(profile) = body?;
    validate_assessment(&profile)?;

    let assessment = state.storage.create_assessment(profile).await?;
    info!("Assessment {} created", assessment.id);
    Ok(Json(assessment))
}

/// GET /api/assessments/:id
pub async fn handle_get_assessment(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Assessment>, AppError> {
    let Path(id) = path?;
    state
        .storage
        .get_assessment(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Assessment not found".to_string()))
}

/// GET /api/assessments/user/:user_id
///
/// Latest assessment submitted under a user id.
pub async fn handle_get_latest_assessment_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Assessment>, AppError> {
    state
        .storage
        .get_assessment_by_user(&user_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No assessment found for user {user_id}")))
}
