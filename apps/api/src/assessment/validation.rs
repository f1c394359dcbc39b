use tracing::debug;

use crate::catalog::{is_known_interest, LEARNING_STYLES};
use crate::errors::AppError;
use crate::models::assessment::{NewAssessment, MAX_SKILL_LEVEL, MIN_SKILL_LEVEL};

pub const MAX_INTERESTS: usize = 6;

/// Checks a submitted profile before it is stored.
///
/// Rejects:
/// - skill levels outside 1..=5
/// - blank career goals, education level or learning style
/// - learning styles other than visual / hands-on / reading / auditory
/// - more than six interests
///
/// Interests outside the catalogue are accepted.
pub fn validate_assessment(profile: &NewAssessment) -> Result<(), AppError> {
    let mut problems = Vec::new();

    for (skill, level) in &profile.skills {
        if !(MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(level) {
            problems.push(format!(
                "skill '{skill}' must be between {MIN_SKILL_LEVEL} and {MAX_SKILL_LEVEL}, got {level}"
            ));
        }
    }

    for (name, value) in [
        ("careerGoals", &profile.career_goals),
        ("educationLevel", &profile.education_level),
        ("learningStyle", &profile.learning_style),
    ] {
        if value.trim().is_empty() {
            problems.push(format!("{name} is required"));
        }
    }

    let style = profile.learning_style.trim();
    if !style.is_empty() && !LEARNING_STYLES.contains(&style) {
        problems.push(format!(
            "learningStyle must be one of {}, got '{style}'",
            LEARNING_STYLES.join(", ")
        ));
    }

    if profile.interests.len() > MAX_INTERESTS {
        problems.push(format!(
            "at most {MAX_INTERESTS} interests allowed, got {}",
            profile.interests.len()
        ));
    }

    for interest in profile.interests.iter().filter(|i| !is_known_interest(i)) {
        debug!("Accepting interest outside the catalogue: {interest}");
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(problems.join("; ")))
    }
}
