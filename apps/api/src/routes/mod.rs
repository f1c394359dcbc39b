pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::catalog::handlers as catalog;
use crate::progress::handlers as progress;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;
use crate::wizard::handlers as wizard;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessments
        .route("/api/assessments", post(assessment::handle_create_assessment))
        .route("/api/assessments/:id", get(assessment::handle_get_assessment))
        .route(
            "/api/assessments/user/:user_id",
            get(assessment::handle_get_latest_assessment_for_user),
        )
        // Recommendations
        .route(
            "/api/recommendations",
            post(recommendation::handle_generate_recommendation),
        )
        .route(
            "/api/recommendations/:id",
            get(recommendation::handle_get_recommendation),
        )
        .route(
            "/api/recommendations/assessment/:assessment_id",
            get(recommendation::handle_get_recommendation_by_assessment),
        )
        // Progress
        .route("/api/progress", post(progress::handle_create_progress))
        .route(
            "/api/progress/:user_id",
            get(progress::handle_get_progress).put(progress::handle_update_progress),
        )
        .route(
            "/api/progress/:user_id/courses/:course_id",
            post(progress::handle_complete_course),
        )
        .route(
            "/api/progress/:user_id/milestones/:name",
            put(progress::handle_set_milestone),
        )
        // Wizard
        .route("/api/wizard", post(wizard::handle_create_wizard))
        .route(
            "/api/wizard/:id",
            get(wizard::handle_get_wizard).patch(wizard::handle_edit_wizard),
        )
        .route("/api/wizard/:id/next", post(wizard::handle_next_step))
        .route("/api/wizard/:id/prev", post(wizard::handle_prev_step))
        .route("/api/wizard/:id/submit", post(wizard::handle_submit_wizard))
        .route("/api/wizard/:id/reset", post(wizard::handle_reset_wizard))
        // Catalogue
        .route("/api/catalog/careers", get(catalog::handle_list_careers))
        .route("/api/catalog/courses", get(catalog::handle_list_courses))
        .route("/api/catalog/internships", get(catalog::handle_list_internships))
        .route("/api/catalog/interests", get(catalog::handle_list_interests))
        .route("/api/catalog/skills", get(catalog::handle_list_skills))
        .with_state(state)
}
