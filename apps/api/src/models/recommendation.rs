use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub match_score: u32,
    pub salary: String,
    pub growth: String,
    pub icon: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub matching_interests: Vec<String>,
    // Only populated by the AI advisor.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub learning_path: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_achieve: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_insights: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub rating: f32,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub students: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills_gained: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Internship {
    pub id: String,
    pub company: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub duration: String,
    pub stipend: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub field: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub learning_outcomes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub skill: String,
    pub current: u8,
    pub target: u8,
    pub gap: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsGapReport {
    pub gaps: Vec<SkillGap>,
    pub recommendations: Vec<String>,
}

/// Which engine produced a recommendation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Ai,
    Rules,
    Mixed,
}

impl RecommendationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationSource::Ai => "ai",
            RecommendationSource::Rules => "rules",
            RecommendationSource::Mixed => "mixed",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ai" => Some(RecommendationSource::Ai),
            "rules" => Some(RecommendationSource::Rules),
            "mixed" => Some(RecommendationSource::Mixed),
            _ => None,
        }
    }
}

/// Output of a recommender, before it is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    pub career_paths: Vec<CareerPath>,
    pub courses: Vec<Course>,
    pub internships: Vec<Internship>,
    pub skills_gap: SkillsGapReport,
    pub source: RecommendationSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecommendation {
    pub assessment_id: Uuid,
    #[serde(flatten)]
    pub set: RecommendationSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: Uuid,
    pub assessment_id: Uuid,
    #[serde(flatten)]
    pub set: RecommendationSet,
    pub generated_at: DateTime<Utc>,
}

impl Recommendation {
    pub fn new(new: NewRecommendation) -> Self {
        Self {
            id: Uuid::new_v4(),
            assessment_id: new.assessment_id,
            set: new.set,
            generated_at: Utc::now(),
        }
    }
}
