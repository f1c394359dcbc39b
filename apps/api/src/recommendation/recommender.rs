//! Recommenders — pluggable, trait-based engines that turn an assessment into
//! careers, courses, internships and a skills-gap report.
//!
//! Default without an API key: `RuleBasedRecommender` (pure-Rust, deterministic).
//! With `GEMINI_API_KEY`: `AiRecommender`, which falls back to the rule-based
//! result section by section whenever the model fails or returns nothing.
//!
//! `AppState` holds an `Arc<dyn Recommender>`, chosen at startup via config.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::assessment::NewAssessment;
use crate::models::recommendation::{
    CareerPath, Course, Internship, RecommendationSet, RecommendationSource,
};
use crate::recommendation::matching::{rank_careers, select_courses, select_internships};
use crate::recommendation::prompts::{
    build_prompt, career_schema, course_schema, internship_schema, ProfileView,
    CAREER_PROMPT_TEMPLATE, COURSE_PROMPT_TEMPLATE, INTERNSHIP_PROMPT_TEMPLATE,
};
use crate::recommendation::skills_gap::analyze_skills_gap;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap engines without touching handlers.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, profile: &NewAssessment) -> Result<RecommendationSet, AppError>;

    /// "rules" | "ai". Reported by /health.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedRecommender
// ────────────────────────────────────────────────────────────────────────────

pub struct RuleBasedRecommender;

#[async_trait]
impl Recommender for RuleBasedRecommender {
    async fn recommend(&self, profile: &NewAssessment) -> Result<RecommendationSet, AppError> {
        Ok(rule_based_set(profile))
    }

    fn backend(&self) -> &'static str {
        "rules"
    }
}

fn rule_based_set(profile: &NewAssessment) -> RecommendationSet {
    RecommendationSet {
        career_paths: rank_careers(profile),
        courses: select_courses(profile),
        internships: select_internships(profile),
        skills_gap: analyze_skills_gap(&profile.skills),
        source: RecommendationSource::Rules,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// AiRecommender
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AiCareer {
    title: String,
    description: String,
    match_score: f64,
    salary: String,
    growth: String,
    #[serde(default)]
    required_skills: Vec<String>,
    #[serde(default)]
    learning_path: Vec<String>,
    #[serde(default)]
    time_to_achieve: Option<String>,
    #[serde(default)]
    industry_insights: Option<String>,
    #[serde(default)]
    key_responsibilities: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AiCourse {
    title: String,
    description: String,
    category: String,
    duration: String,
    difficulty: Option<String>,
    provider: Option<String>,
    priority: Option<f64>,
    #[serde(default)]
    skills_gained: Vec<String>,
    #[serde(default)]
    prerequisites: Vec<String>,
    estimated_cost: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AiInternship {
    title: String,
    company: String,
    location: String,
    description: String,
    duration: String,
    stipend: String,
    #[serde(default)]
    requirements: Vec<String>,
    #[serde(default)]
    learning_outcomes: Vec<String>,
    application_deadline: Option<String>,
    field: String,
}

#[derive(Debug, Deserialize)]
struct CareerList {
    #[serde(default)]
    careers: Vec<AiCareer>,
}

#[derive(Debug, Deserialize)]
struct CourseList {
    #[serde(default)]
    courses: Vec<AiCourse>,
}

#[derive(Debug, Deserialize)]
struct InternshipList {
    #[serde(default)]
    internships: Vec<AiInternship>,
}

/// Font Awesome icon for a generated career, picked by title keywords.
pub fn career_icon(title: &str) -> &'static str {
    const RULES: &[(&[&str], &str)] = &[
        (&["engineer", "developer", "programmer"], "fas fa-code"),
        (&["data", "analyst", "scientist"], "fas fa-chart-bar"),
        (&["design", "creative", "art"], "fas fa-paint-brush"),
        (&["market", "sales", "business"], "fas fa-chart-line"),
        (&["manager", "lead", "director"], "fas fa-users"),
        (&["finance", "accounting", "financial"], "fas fa-dollar-sign"),
        (&["research", "academic"], "fas fa-microscope"),
        (&["content", "writer", "media"], "fas fa-pen"),
        (&["consultant", "advisor", "strategy"], "fas fa-lightbulb"),
    ];

    let lower = title.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, icon)| *icon)
        .unwrap_or("fas fa-briefcase")
}

fn into_careers(list: CareerList) -> Vec<CareerPath> {
    list.careers
        .into_iter()
        .enumerate()
        .map(|(i, c)| CareerPath {
            id: format!("career-{}", i + 1),
            icon: career_icon(&c.title).to_string(),
            match_score: c.match_score.round().clamp(0.0, 100.0) as u32,
            title: c.title,
            description: c.description,
            salary: c.salary,
            growth: c.growth,
            required_skills: c.required_skills,
            matching_interests: vec![],
            learning_path: c.learning_path,
            time_to_achieve: c.time_to_achieve,
            industry_insights: c.industry_insights,
            key_responsibilities: c.key_responsibilities,
        })
        .collect()
}

fn into_courses(list: CourseList) -> Vec<Course> {
    list.courses
        .into_iter()
        .enumerate()
        .map(|(i, c)| Course {
            id: format!("course-{}", i + 1),
            title: c.title,
            description: c.description,
            category: c.category,
            rating: 0.0,
            duration: c.duration,
            students: None,
            price: c.estimated_cost,
            difficulty: c.difficulty,
            provider: c.provider,
            priority: c.priority.map(|p| p.round().clamp(1.0, 10.0) as u32),
            skills_gained: c.skills_gained,
            prerequisites: c.prerequisites,
        })
        .collect()
}

fn into_internships(list: InternshipList) -> Vec<Internship> {
    list.internships
        .into_iter()
        .enumerate()
        .map(|(i, n)| Internship {
            id: format!("internship-{}", i + 1),
            company: n.company,
            title: n.title,
            description: n.description,
            location: n.location,
            duration: n.duration,
            stipend: n.stipend,
            schedule: None,
            icon: None,
            field: n.field,
            requirements: n.requirements,
            learning_outcomes: n.learning_outcomes,
            application_deadline: n.application_deadline,
        })
        .collect()
}

/// Keeps a model result when it succeeded with at least one item; otherwise
/// logs and substitutes the rule-based section. Returns whether it fell back.
fn or_fallback<T>(
    section: &str,
    generated: Result<Vec<T>, LlmError>,
    fallback: impl FnOnce() -> Vec<T>,
) -> (Vec<T>, bool) {
    match generated {
        Ok(items) if !items.is_empty() => (items, false),
        Ok(_) => {
            warn!("AI returned no {section}; using rule-based {section}");
            (fallback(), true)
        }
        Err(e) => {
            warn!("AI {section} generation failed: {e}; using rule-based {section}");
            (fallback(), true)
        }
    }
}

fn combined_source(fallbacks: &[bool]) -> RecommendationSource {
    if fallbacks.iter().all(|f| *f) {
        RecommendationSource::Rules
    } else if fallbacks.iter().any(|f| *f) {
        RecommendationSource::Mixed
    } else {
        RecommendationSource::Ai
    }
}

/// Generative recommender. The skills-gap report is always computed locally.
pub struct AiRecommender {
    llm: LlmClient,
}

impl AiRecommender {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Recommender for AiRecommender {
    async fn recommend(&self, profile: &NewAssessment) -> Result<RecommendationSet, AppError> {
        let career_prompt = build_prompt(CAREER_PROMPT_TEMPLATE, profile, ProfileView::Career);
        let course_prompt = build_prompt(COURSE_PROMPT_TEMPLATE, profile, ProfileView::Course);
        let internship_prompt =
            build_prompt(INTERNSHIP_PROMPT_TEMPLATE, profile, ProfileView::Internship);

        let (career_schema, course_schema, internship_schema) =
            (career_schema(), course_schema(), internship_schema());

        let (careers, courses, internships) = tokio::join!(
            self.llm.call_json::<CareerList>(&career_prompt, &career_schema),
            self.llm.call_json::<CourseList>(&course_prompt, &course_schema),
            self.llm
                .call_json::<InternshipList>(&internship_prompt, &internship_schema),
        );

        let (career_paths, careers_fell_back) =
            or_fallback("careers", careers.map(into_careers), || rank_careers(profile));
        let (courses, courses_fell_back) =
            or_fallback("courses", courses.map(into_courses), || select_courses(profile));
        let (internships, internships_fell_back) = or_fallback(
            "internships",
            internships.map(into_internships),
            || select_internships(profile),
        );

        let source = combined_source(&[careers_fell_back, courses_fell_back, internships_fell_back]);
        info!(
            "AI recommendations assembled (model: {}, source: {})",
            self.llm.model(),
            source.as_str()
        );

        Ok(RecommendationSet {
            career_paths,
            courses,
            internships,
            skills_gap: analyze_skills_gap(&profile.skills),
            source,
        })
    }

    fn backend(&self) -> &'static str {
        "ai"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use super::*;
    use crate::llm_client::parse_json_text;
    use crate::llm_client::test_server::{api_error, candidate, prompt_of, FakeGemini};

    /// Answers each section prompt with one generated item; internships fail
    /// with a client error when `internships_fail` is set.
    fn section_reply(body: &Value, internships_fail: bool) -> (StatusCode, Value) {
        let prompt = prompt_of(body);
        let payload = if prompt.contains("specific career paths") {
            json!({ "careers": [{
                "title": "Machine Learning Engineer", "description": "Builds models",
                "matchScore": 91.2, "salary": "$120k", "growth": "+30%",
                "requiredSkills": ["Python"], "learningPath": ["Statistics"]
            }]})
        } else if prompt.contains("specific courses") {
            json!({ "courses": [{
                "title": "Deep Learning", "description": "Neural nets", "category": "AI",
                "duration": "8 weeks", "difficulty": "Advanced", "provider": "Coursera",
                "priority": 9, "estimatedCost": "$49/month"
            }]})
        } else if internships_fail {
            return api_error(StatusCode::BAD_REQUEST, "prompt blocked");
        } else {
            json!({ "internships": [{
                "title": "ML Intern", "company": "Acme Labs", "location": "Remote",
                "description": "Train models", "duration": "12 weeks",
                "stipend": "$3,000/month", "field": "AI"
            }]})
        };
        candidate(&payload.to_string())
    }

    #[tokio::test]
    async fn test_rule_based_set_is_complete() {
        let set = RuleBasedRecommender
            .recommend(&NewAssessment::default())
            .await
            .unwrap();
        assert_eq!(set.source, RecommendationSource::Rules);
        assert_eq!(set.career_paths.len(), 3);
        assert!(!set.courses.is_empty());
        assert!(!set.internships.is_empty());
        assert_eq!(set.skills_gap.gaps.len(), 6);
    }

    #[tokio::test]
    async fn test_ai_recommender_falls_back_when_api_unreachable() {
        // Port 9 (discard) on localhost refuses connections immediately.
        let llm = LlmClient::new("test-key".to_string(), "gemini-test".to_string())
            .unwrap()
            .with_base_url("http://127.0.0.1:9");
        let profile = NewAssessment::default();

        let set = AiRecommender::new(llm).recommend(&profile).await.unwrap();

        assert_eq!(set.source, RecommendationSource::Rules);
        assert_eq!(set.career_paths, rank_careers(&profile));
        assert_eq!(set.courses, select_courses(&profile));
        assert_eq!(set.internships, select_internships(&profile));
    }

    #[tokio::test]
    async fn test_ai_recommender_uses_generated_sections() {
        let server = FakeGemini::start(|_, body| section_reply(body, false)).await;
        let recommender = AiRecommender::new(server.client());
        let profile = NewAssessment::default();

        let set = recommender.recommend(&profile).await.unwrap();

        assert_eq!(recommender.backend(), "ai");
        assert_eq!(set.source, RecommendationSource::Ai);
        assert_eq!(set.career_paths.len(), 1);
        assert_eq!(set.career_paths[0].id, "career-1");
        assert_eq!(set.career_paths[0].match_score, 91);
        assert_eq!(set.career_paths[0].icon, "fas fa-code");
        assert_eq!(set.courses[0].id, "course-1");
        assert_eq!(set.courses[0].price.as_deref(), Some("$49/month"));
        assert_eq!(set.internships[0].id, "internship-1");
        assert_eq!(set.internships[0].company, "Acme Labs");
        assert_eq!(set.skills_gap, analyze_skills_gap(&profile.skills));
        assert_eq!(server.hits(), 3);
    }

    #[tokio::test]
    async fn test_ai_recommender_mixes_in_rules_for_failed_section() {
        let server = FakeGemini::start(|_, body| section_reply(body, true)).await;
        let profile = NewAssessment::default();

        let set = AiRecommender::new(server.client())
            .recommend(&profile)
            .await
            .unwrap();

        assert_eq!(set.source, RecommendationSource::Mixed);
        assert_eq!(set.career_paths[0].title, "Machine Learning Engineer");
        assert_eq!(set.courses[0].title, "Deep Learning");
        assert_eq!(set.internships, select_internships(&profile));
        // 400 is not retried, so one request per section.
        assert_eq!(server.hits(), 3);
    }

    #[test]
    fn test_career_icon_keywords() {
        assert_eq!(career_icon("Senior Backend Engineer"), "fas fa-code");
        assert_eq!(career_icon("Data Scientist"), "fas fa-chart-bar");
        assert_eq!(career_icon("Brand Designer"), "fas fa-paint-brush");
        assert_eq!(career_icon("Financial Planner"), "fas fa-dollar-sign");
        assert_eq!(career_icon("Park Ranger"), "fas fa-briefcase");
    }

    #[test]
    fn test_into_careers_assigns_ids_and_clamps_score() {
        let list: CareerList = parse_json_text(
            r#"{"careers": [
                {"title": "Cloud Engineer", "description": "d", "matchScore": 87.6,
                 "salary": "$90k", "growth": "+20%", "requiredSkills": ["AWS"],
                 "learningPath": ["Learn Linux"], "timeToAchieve": "2 years",
                 "industryInsights": "Hot", "keyResponsibilities": ["Deploy"]},
                {"title": "Market Researcher", "description": "d", "matchScore": 140,
                 "salary": "$60k", "growth": "+5%"}
            ]}"#,
        )
        .unwrap();
        let careers = into_careers(list);
        assert_eq!(careers[0].id, "career-1");
        assert_eq!(careers[0].match_score, 88);
        assert_eq!(careers[0].icon, "fas fa-code");
        assert_eq!(careers[1].id, "career-2");
        assert_eq!(careers[1].match_score, 100);
        assert_eq!(careers[1].icon, "fas fa-chart-line");
    }

    #[test]
    fn test_into_courses_maps_cost_and_priority() {
        let list: CourseList = parse_json_text(
            r#"```json
            {"courses": [{"title": "SQL", "description": "d", "category": "Data",
              "duration": "4 weeks", "difficulty": "Beginner", "provider": "Coursera",
              "priority": 11, "skillsGained": ["SQL"], "prerequisites": [],
              "estimatedCost": "$0-$49"}]}
            ```"#,
        )
        .unwrap();
        let courses = into_courses(list);
        assert_eq!(courses[0].id, "course-1");
        assert_eq!(courses[0].price.as_deref(), Some("$0-$49"));
        assert_eq!(courses[0].priority, Some(10));
    }

    #[test]
    fn test_or_fallback_replaces_empty_and_errors() {
        let (items, fell_back) = or_fallback("courses", Ok(Vec::<u8>::new()), || vec![1, 2]);
        assert_eq!((items, fell_back), (vec![1, 2], true));

        let (items, fell_back) =
            or_fallback("courses", Err(LlmError::EmptyContent), || vec![7u8]);
        assert_eq!((items, fell_back), (vec![7], true));

        let (items, fell_back) = or_fallback("courses", Ok(vec![3u8]), || vec![9]);
        assert_eq!((items, fell_back), (vec![3], false));
    }

    #[test]
    fn test_combined_source() {
        assert_eq!(combined_source(&[false, false, false]), RecommendationSource::Ai);
        assert_eq!(combined_source(&[true, false, false]), RecommendationSource::Mixed);
        assert_eq!(combined_source(&[true, true, true]), RecommendationSource::Rules);
    }
}
