// All prompt templates and response schemas for the AI advisor.
// Reuses cross-cutting fragments from llm_client::prompts.

use serde_json::{json, Value};

use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, REALISM_INSTRUCTION};
use crate::models::assessment::NewAssessment;

/// Career prompt. Replace `{profile}` before sending.
pub const CAREER_PROMPT_TEMPLATE: &str = r#"As an expert career advisor, analyze this student profile and recommend 3 specific career paths:

Profile:
{profile}

For each career recommendation, provide:
1. Job title
2. Detailed description (2-3 sentences)
3. Match percentage (realistic based on profile, 0-100)
4. Average salary range
5. Growth outlook
6. Top 5 required skills
7. Learning path (5 specific steps)
8. Time to achieve career
9. Current industry insights
10. 5 key responsibilities

Respond with JSON format for 3 careers."#;

/// Course prompt. Replace `{profile}` before sending.
pub const COURSE_PROMPT_TEMPLATE: &str = r#"As an expert learning advisor, recommend 4 specific courses for this student profile:

Profile:
{profile}

For each course recommendation, provide:
1. Course title
2. Detailed description
3. Category/field
4. Duration
5. Difficulty level (Beginner/Intermediate/Advanced)
6. Recommended provider/platform
7. Priority (1-10, where 10 is highest priority)
8. Skills gained (5 specific skills)
9. Prerequisites
10. Estimated cost range

Focus on courses that address skill gaps and support career goals.

Respond with JSON format for 4 courses."#;

/// Internship prompt. Replace `{profile}` before sending.
pub const INTERNSHIP_PROMPT_TEMPLATE: &str = r#"As an expert career advisor, recommend 3 specific internship opportunities for this student:

Profile:
{profile}

For each internship, provide:
1. Internship title
2. Company name (realistic, well-known company)
3. Location (consider geographic preference)
4. Detailed description
5. Duration
6. Stipend/compensation
7. Key requirements (3-4 items)
8. Learning outcomes (4-5 specific outcomes)
9. Application deadline
10. Field/industry

Respond with JSON format for 3 internships."#;

/// Which fields a prompt renders. Internships care about location, courses don't.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileView {
    Career,
    Course,
    Internship,
}

/// Renders the profile block shared by all advisor prompts.
pub fn render_profile(profile: &NewAssessment, view: ProfileView) -> String {
    let skills = profile
        .skills
        .iter()
        .map(|(skill, level)| format!("{skill}: {level}/5"))
        .collect::<Vec<_>>()
        .join(", ");

    let field_of_study = profile.field_of_study.as_deref().unwrap_or("Not specified");

    let mut lines = vec![
        format!("- Skills: {skills}"),
        format!("- Interests: {}", profile.interests.join(", ")),
        format!("- Career Goals: {}", profile.career_goals),
        format!("- Education: {}", profile.education_level),
        format!("- Field of Study: {field_of_study}"),
    ];

    match view {
        ProfileView::Career => {
            lines.push(format!("- Learning Style: {}", profile.learning_style));
            lines.push(format!(
                "- Work Environment Preference: {}",
                or_default(&profile.work_environment, "Not specified")
            ));
            lines.push(format!(
                "- Salary Expectations: {}",
                or_default(&profile.salary_expectations, "Not specified")
            ));
            lines.push(format!(
                "- Work-Life Balance: {}",
                or_default(&profile.work_life_balance, "Not specified")
            ));
            lines.push(format!(
                "- Geographic Preference: {}",
                or_default(&profile.geographic_preference, "Not specified")
            ));
            if let Some(experience) = non_blank(&profile.previous_experience) {
                lines.push(format!("- Previous Experience: {experience}"));
            }
            if let Some(reason) = non_blank(&profile.career_change_reason) {
                lines.push(format!("- Reason for Career Change: {reason}"));
            }
        }
        ProfileView::Course => {
            lines.push(format!("- Learning Style: {}", profile.learning_style));
        }
        ProfileView::Internship => {
            lines.push(format!(
                "- Geographic Preference: {}",
                or_default(&profile.geographic_preference, "Flexible")
            ));
            lines.push(format!(
                "- Work Environment Preference: {}",
                or_default(&profile.work_environment, "Open to both")
            ));
        }
    }

    lines.join("\n")
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    non_blank(value).unwrap_or(default)
}

pub fn build_prompt(template: &str, profile: &NewAssessment, view: ProfileView) -> String {
    format!(
        "{}\n\n{}\n{}",
        template.replace("{profile}", &render_profile(profile, view)),
        REALISM_INSTRUCTION,
        JSON_ONLY_INSTRUCTION
    )
}

fn string_array() -> Value {
    json!({ "type": "array", "items": { "type": "string" } })
}

/// Wraps an item schema into `{ <key>: [item, ...] }` with every property required.
fn list_schema(key: &str, properties: Value) -> Value {
    let required: Vec<String> = properties
        .as_object()
        .map(|props| props.keys().cloned().collect())
        .unwrap_or_default();
    json!({
        "type": "object",
        "properties": {
            key: {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": properties,
                    "required": required
                }
            }
        },
        "required": [key]
    })
}

pub fn career_schema() -> Value {
    list_schema(
        "careers",
        json!({
            "title": { "type": "string" },
            "description": { "type": "string" },
            "matchScore": { "type": "number" },
            "salary": { "type": "string" },
            "growth": { "type": "string" },
            "requiredSkills": string_array(),
            "learningPath": string_array(),
            "timeToAchieve": { "type": "string" },
            "industryInsights": { "type": "string" },
            "keyResponsibilities": string_array()
        }),
    )
}

pub fn course_schema() -> Value {
    list_schema(
        "courses",
        json!({
            "title": { "type": "string" },
            "description": { "type": "string" },
            "category": { "type": "string" },
            "duration": { "type": "string" },
            "difficulty": { "type": "string" },
            "provider": { "type": "string" },
            "priority": { "type": "number" },
            "skillsGained": string_array(),
            "prerequisites": string_array(),
            "estimatedCost": { "type": "string" }
        }),
    )
}

pub fn internship_schema() -> Value {
    list_schema(
        "internships",
        json!({
            "title": { "type": "string" },
            "company": { "type": "string" },
            "location": { "type": "string" },
            "description": { "type": "string" },
            "duration": { "type": "string" },
            "stipend": { "type": "string" },
            "requirements": string_array(),
            "learningOutcomes": string_array(),
            "applicationDeadline": { "type": "string" },
            "field": { "type": "string" }
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lists_skills_as_fraction_of_five() {
        let profile = NewAssessment::default();
        let rendered = render_profile(&profile, ProfileView::Course);
        assert!(rendered.contains("programming: 3/5"));
        assert!(rendered.contains("- Interests: Technology, Creative"));
        assert!(rendered.contains("- Learning Style: visual"));
    }

    #[test]
    fn test_missing_preferences_use_view_defaults() {
        let profile = NewAssessment::default();
        let career = render_profile(&profile, ProfileView::Career);
        let internship = render_profile(&profile, ProfileView::Internship);
        assert!(career.contains("- Geographic Preference: Not specified"));
        assert!(internship.contains("- Geographic Preference: Flexible"));
        assert!(internship.contains("- Work Environment Preference: Open to both"));
        assert!(!career.contains("Previous Experience"));
    }

    #[test]
    fn test_blank_preferences_treated_as_missing() {
        let profile = NewAssessment {
            geographic_preference: Some("   ".to_string()),
            previous_experience: Some("Barista for two years".to_string()),
            ..Default::default()
        };
        let career = render_profile(&profile, ProfileView::Career);
        assert!(career.contains("- Geographic Preference: Not specified"));
        assert!(career.contains("- Previous Experience: Barista for two years"));
    }

    #[test]
    fn test_build_prompt_fills_placeholder() {
        let prompt = build_prompt(
            CAREER_PROMPT_TEMPLATE,
            &NewAssessment::default(),
            ProfileView::Career,
        );
        assert!(!prompt.contains("{profile}"));
        assert!(prompt.contains("recommend 3 specific career paths"));
        assert!(prompt.ends_with(JSON_ONLY_INSTRUCTION));
    }

    #[test]
    fn test_schemas_require_every_property() {
        for (schema, key) in [
            (career_schema(), "careers"),
            (course_schema(), "courses"),
            (internship_schema(), "internships"),
        ] {
            let items = &schema["properties"][key]["items"];
            let props = items["properties"].as_object().unwrap();
            let required = items["required"].as_array().unwrap();
            assert_eq!(props.len(), required.len(), "{key}");
            assert_eq!(schema["required"][0], key);
        }
    }
}
