use axum::Json;
use serde::Serialize;

use crate::catalog::{
    all_careers, all_courses, all_internships, InterestCategory, INTEREST_CATEGORIES,
};
use crate::models::assessment::SKILL_KEYS;
use crate::models::recommendation::{CareerPath, Course, Internship};

#[derive(Debug, Serialize)]
pub struct SkillDescriptor {
    pub key: &'static str,
    pub label: &'static str,
}

/// GET /api/catalog/careers
pub async fn handle_list_careers() -> Json<Vec<CareerPath>> {
    Json(all_careers())
}

/// GET /api/catalog/courses
pub async fn handle_list_courses() -> Json<Vec<Course>> {
    Json(all_courses())
}

/// GET /api/catalog/internships
pub async fn handle_list_internships() -> Json<Vec<Internship>> {
    Json(all_internships())
}

/// GET /api/catalog/interests
pub async fn handle_list_interests() -> Json<&'static [InterestCategory]> {
    Json(INTEREST_CATEGORIES)
}

/// GET /api/catalog/skills
///
/// Skill keys the wizard rates, in display order.
pub async fn handle_list_skills() -> Json<Vec<SkillDescriptor>> {
    Json(
        SKILL_KEYS
            .iter()
            .map(|&(key, label)| SkillDescriptor { key, label })
            .collect(),
    )
}
