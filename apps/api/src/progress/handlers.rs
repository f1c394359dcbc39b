use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::progress::{NewUserProgress, ProgressChange, ProgressUpdate, UserProgress};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MilestoneRequest {
    pub completed: bool,
}

/// POST /api/progress
///
/// 409 when the user already has a record.
pub async fn handle_create_progress(
    State(state): State<AppState>,
    body: Result<Json<NewUserProgress>, JsonRejection>,
) -> Result<Json<UserProgress>, AppError> {
    let Json(new) = body?;
    if new.user_id.trim().is_empty() {
        return Err(AppError::Validation("userId is required".to_string()));
    }

    let progress = state.storage.create_progress(new).await?;
    info!("Progress record created for user {}", progress.user_id);
    Ok(Json(progress))
}

/// GET /api/progress/:user_id
pub async fn handle_get_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProgress>, AppError> {
    state
        .storage
        .get_progress(&user_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("User progress not found".to_string()))
}

/// PUT /api/progress/:user_id
pub async fn handle_update_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<Json<ProgressUpdate>, JsonRejection>,
) -> Result<Json<UserProgress>, AppError> {
    let Json(update) = body?;
    let progress = state
        .storage
        .update_progress(&user_id, ProgressChange::Merge(update))
        .await?;
    Ok(Json(progress))
}

/// POST /api/progress/:user_id/courses/:course_id
///
/// Idempotent: completing an already-completed course returns the record unchanged.
pub async fn handle_complete_course(
    State(state): State<AppState>,
    Path((user_id, course_id)): Path<(String, String)>,
) -> Result<Json<UserProgress>, AppError> {
    let progress = state
        .storage
        .update_progress(&user_id, ProgressChange::CompleteCourse(course_id.clone()))
        .await?;
    info!("User {user_id} completed course {course_id}");
    Ok(Json(progress))
}

/// PUT /api/progress/:user_id/milestones/:name
pub async fn handle_set_milestone(
    State(state): State<AppState>,
    Path((user_id, name)): Path<(String, String)>,
    body: Result<Json<MilestoneRequest>, JsonRejection>,
) -> Result<Json<UserProgress>, AppError> {
    let Json(request) = body?;
    let change = ProgressChange::SetMilestone {
        name,
        completed: request.completed,
    };
    let progress = state.storage.update_progress(&user_id, change).await?;
    Ok(Json(progress))
}
