//! Axum route handlers for the Wizard API.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::assessment::validation::validate_assessment;
use crate::errors::AppError;
use crate::models::assessment::{Assessment, NewAssessment};
use crate::models::recommendation::Recommendation;
use crate::recommendation::generator::recommendation_for;
use crate::state::AppState;
use crate::wizard::{AssessmentWizard, WizardEdit, WizardView};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct WizardEditRequest {
    pub edits: Vec<WizardEdit>,
}

#[derive(Debug, Serialize)]
pub struct WizardSubmitResponse {
    pub wizard: WizardView,
    pub assessment: Assessment,
    pub recommendation: Recommendation,
}

fn wizard_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Wizard {id} not found"))
}

fn wizard_locked(id: Uuid, wizard: &AssessmentWizard) -> AppError {
    if wizard.submitting {
        AppError::Conflict(format!("Wizard {id} is being submitted"))
    } else {
        AppError::Conflict(format!(
            "Wizard {id} was already submitted; reset it to start over"
        ))
    }
}

/// Applies `f` to an unlocked wizard and returns its view.
async fn modify_open(
    state: &AppState,
    id: Uuid,
    f: impl FnOnce(&mut AssessmentWizard),
) -> Result<Json<WizardView>, AppError> {
    state
        .wizards
        .update(id, |wizard| {
            if wizard.is_locked() {
                return Err(wizard_locked(id, wizard));
            }
            f(wizard);
            Ok(wizard.view(id))
        })
        .await
        .ok_or_else(|| wizard_not_found(id))?
        .map(Json)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/wizard
pub async fn handle_create_wizard(
    State(state): State<AppState>,
) -> (StatusCode, Json<WizardView>) {
    let (id, wizard) = state.wizards.create().await;
    info!("Wizard {id} started");
    (StatusCode::CREATED, Json(wizard.view(id)))
}

/// GET /api/wizard/:id
pub async fn handle_get_wizard(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<WizardView>, AppError> {
    let Path(id) = path?;
    state
        .wizards
        .get(id)
        .await
        .map(|wizard| Json(wizard.view(id)))
        .ok_or_else(|| wizard_not_found(id))
}

/// PATCH /api/wizard/:id
pub async fn handle_edit_wizard(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<WizardEditRequest>, JsonRejection>,
) -> Result<Json<WizardView>, AppError> {
    let Path(id) = path?;
    let Json(request) = body?;
    modify_open(&state, id, |wizard| {
        for edit in request.edits {
            wizard.apply(edit);
        }
    })
    .await
}

/// POST /api/wizard/:id/next
pub async fn handle_next_step(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<WizardView>, AppError> {
    let Path(id) = path?;
    modify_open(&state, id, AssessmentWizard::next_step).await
}

/// POST /api/wizard/:id/prev
pub async fn handle_prev_step(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<WizardView>, AppError> {
    let Path(id) = path?;
    modify_open(&state, id, AssessmentWizard::prev_step).await
}

/// POST /api/wizard/:id/reset
pub async fn handle_reset_wizard(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<WizardView>, AppError> {
    let Path(id) = path?;
    state
        .wizards
        .update(id, |wizard| {
            if wizard.submitting {
                return Err(wizard_locked(id, wizard));
            }
            wizard.reset();
            Ok(wizard.view(id))
        })
        .await
        .ok_or_else(|| wizard_not_found(id))?
        .map(Json)
}

/// POST /api/wizard/:id/submit
///
/// Validates the draft, stores it as an assessment, generates recommendations
/// and marks the wizard complete. The draft is claimed and snapshotted under
/// the store lock, so overlapping submits get 409 and edits cannot race it.
pub async fn handle_submit_wizard(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<WizardSubmitResponse>, AppError> {
    let Path(id) = path?;

    let draft = state
        .wizards
        .update(id, |wizard| {
            if wizard.is_locked() {
                return Err(wizard_locked(id, wizard));
            }
            validate_assessment(&wizard.draft)?;
            wizard.claim_for_submit();
            Ok(wizard.draft.clone())
        })
        .await
        .ok_or_else(|| wizard_not_found(id))??;

    let (assessment, recommendation) = match persist_submission(&state, draft).await {
        Ok(saved) => saved,
        Err(e) => {
            warn!("Wizard {id} submit failed, releasing claim: {e}");
            state.wizards.update(id, AssessmentWizard::release_claim).await;
            return Err(e);
        }
    };

    let view = state
        .wizards
        .update(id, |wizard| {
            wizard.complete(assessment.id);
            wizard.view(id)
        })
        .await
        .ok_or_else(|| wizard_not_found(id))?;

    info!("Wizard {id} submitted as assessment {}", assessment.id);

    Ok(Json(WizardSubmitResponse {
        wizard: view,
        assessment,
        recommendation,
    }))
}

async fn persist_submission(
    state: &AppState,
    draft: NewAssessment,
) -> Result<(Assessment, Recommendation), AppError> {
    let assessment = state.storage.create_assessment(draft).await?;
    let recommendation =
        recommendation_for(state.storage.as_ref(), state.recommender.as_ref(), &assessment)
            .await?;
    Ok((assessment, recommendation))
}
