use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Self-rated skill levels keyed by normalized skill name (`dataanalysis`, ...).
pub type SkillRatings = BTreeMap<String, u8>;

pub const MIN_SKILL_LEVEL: u8 = 1;
pub const MAX_SKILL_LEVEL: u8 = 5;

/// Canonical skill keys collected by the wizard, in display order.
pub const SKILL_KEYS: &[(&str, &str)] = &[
    ("programming", "Programming & Development"),
    ("dataanalysis", "Data Analysis"),
    ("digitalmarketing", "Digital Marketing"),
    ("communication", "Communication"),
    ("leadership", "Leadership"),
    ("problemsolving", "Problem Solving"),
];

/// Lowercases and strips whitespace so "Data Analysis" and "dataanalysis" match.
pub fn normalize_skill_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn default_skills() -> SkillRatings {
    [
        ("programming", 3),
        ("dataanalysis", 2),
        ("digitalmarketing", 4),
        ("communication", 4),
        ("leadership", 3),
        ("problemsolving", 5),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

/// Insert payload for an assessment. Everything the wizard collects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssessment {
    #[serde(default)]
    pub user_id: Option<String>,
    pub skills: SkillRatings,
    pub interests: Vec<String>,
    pub career_goals: String,
    pub education_level: String,
    #[serde(default)]
    pub field_of_study: Option<String>,
    pub learning_style: String,
    #[serde(default)]
    pub work_environment: Option<String>,
    #[serde(default)]
    pub salary_expectations: Option<String>,
    #[serde(default)]
    pub work_life_balance: Option<String>,
    #[serde(default)]
    pub geographic_preference: Option<String>,
    #[serde(default)]
    pub previous_experience: Option<String>,
    #[serde(default)]
    pub career_change_reason: Option<String>,
}

impl Default for NewAssessment {
    fn default() -> Self {
        Self {
            user_id: None,
            skills: default_skills(),
            interests: vec!["Technology".to_string(), "Creative".to_string()],
            career_goals: "Short-term (6 months - 2 years)".to_string(),
            education_level: "Currently in College".to_string(),
            field_of_study: None,
            learning_style: "visual".to_string(),
            work_environment: None,
            salary_expectations: None,
            work_life_balance: None,
            geographic_preference: None,
            previous_experience: None,
            career_change_reason: None,
        }
    }
}

impl NewAssessment {
    /// Level for a skill, looked up by normalized key. Unrated skills are 0.
    pub fn skill_level(&self, skill: &str) -> u8 {
        self.skills
            .get(&normalize_skill_key(skill))
            .copied()
            .unwrap_or(0)
    }

    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.iter().any(|i| i == interest)
    }
}

/// A stored assessment submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: Uuid,
    #[serde(flatten)]
    pub profile: NewAssessment,
    pub completed_at: DateTime<Utc>,
}

impl Assessment {
    pub fn new(profile: NewAssessment) -> Self {
        Self {
            id: Uuid::new_v4(),
            profile,
            completed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_skill_key() {
        assert_eq!(normalize_skill_key("Data Analysis"), "dataanalysis");
        assert_eq!(normalize_skill_key("Problem  Solving"), "problemsolving");
        assert_eq!(normalize_skill_key("programming"), "programming");
    }

    #[test]
    fn test_skill_level_uses_normalized_key() {
        let profile = NewAssessment::default();
        assert_eq!(profile.skill_level("Data Analysis"), 2);
        assert_eq!(profile.skill_level("Problem Solving"), 5);
        assert_eq!(profile.skill_level("Underwater Welding"), 0);
    }

    #[test]
    fn test_assessment_deserializes_camel_case_with_optional_fields_missing() {
        let body = json!({
            "skills": {"programming": 4},
            "interests": ["Technology"],
            "careerGoals": "Long-term (3-5 years)",
            "educationLevel": "Bachelor's Degree",
            "learningStyle": "hands-on"
        });
        let parsed: NewAssessment = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.skills["programming"], 4);
        assert!(parsed.user_id.is_none());
        assert!(parsed.work_environment.is_none());
    }

    #[test]
    fn test_assessment_serializes_flat() {
        let assessment = Assessment::new(NewAssessment::default());
        let value = serde_json::to_value(&assessment).unwrap();
        assert!(value.get("id").is_some());
        assert_eq!(value["learningStyle"], "visual");
        assert!(value.get("profile").is_none());
        assert!(value.get("completedAt").is_some());
    }
}
