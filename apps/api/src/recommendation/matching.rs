//! Rule-based matching of an assessment against the static catalogue.
//!
//! Career score per catalogue entry:
//! - +30 for every matching interest the user selected
//! - +min(level × 10, 40) for every required skill (level looked up by normalized key)
//! - capped at 100
//!
//! Courses and internships are filtered by case-insensitive interest containment.

use tracing::debug;

use crate::catalog::{CareerSeed, CAREERS, COURSES, INTERNSHIPS};
use crate::models::assessment::NewAssessment;
use crate::models::recommendation::{CareerPath, Course, Internship};

pub const TOP_CAREERS: usize = 3;
pub const TOP_COURSES: usize = 4;
pub const TOP_INTERNSHIPS: usize = 3;

const INTEREST_POINTS: u32 = 30;
const SKILL_POINTS_PER_LEVEL: u32 = 10;
const SKILL_POINTS_CAP: u32 = 40;
const MAX_MATCH_SCORE: u32 = 100;

/// Scores a single career for a profile. Always within 0..=100.
pub fn career_match_score(career: &CareerSeed, profile: &NewAssessment) -> u32 {
    let interest_points: u32 = career
        .matching_interests
        .iter()
        .filter(|interest| profile.has_interest(interest))
        .map(|_| INTEREST_POINTS)
        .sum();

    let skill_points: u32 = career
        .required_skills
        .iter()
        .map(|skill| {
            let level = profile.skill_level(skill) as u32;
            (level * SKILL_POINTS_PER_LEVEL).min(SKILL_POINTS_CAP)
        })
        .sum();

    (interest_points + skill_points).min(MAX_MATCH_SCORE)
}

/// Top careers by match score, highest first. Ties keep catalogue order.
pub fn rank_careers(profile: &NewAssessment) -> Vec<CareerPath> {
    let mut scored: Vec<(u32, &CareerSeed)> = CAREERS
        .iter()
        .map(|career| (career_match_score(career, profile), career))
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    debug!(
        "Career ranking head: {:?}",
        scored
            .iter()
            .take(TOP_CAREERS)
            .map(|(s, c)| (c.id, *s))
            .collect::<Vec<_>>()
    );

    scored
        .into_iter()
        .take(TOP_CAREERS)
        .map(|(score, career)| career.to_career_path(score))
        .collect()
}

fn mentions_any_interest(haystacks: &[&str], interests: &[String]) -> bool {
    let haystacks: Vec<String> = haystacks.iter().map(|h| h.to_lowercase()).collect();
    interests.iter().any(|interest| {
        let needle = interest.to_lowercase();
        haystacks.iter().any(|h| h.contains(&needle))
    })
}

/// Courses whose category or title mentions an interest, best rated first.
pub fn select_courses(profile: &NewAssessment) -> Vec<Course> {
    let mut matching: Vec<_> = COURSES
        .iter()
        .filter(|course| mentions_any_interest(&[course.category, course.title], &profile.interests))
        .collect();

    matching.sort_by(|a, b| b.rating.total_cmp(&a.rating));

    matching
        .into_iter()
        .take(TOP_COURSES)
        .map(Course::from)
        .collect()
}

/// Internships whose field or title mentions an interest, in catalogue order.
pub fn select_internships(profile: &NewAssessment) -> Vec<Internship> {
    INTERNSHIPS
        .iter()
        .filter(|internship| {
            mentions_any_interest(&[internship.field, internship.title], &profile.interests)
        })
        .take(TOP_INTERNSHIPS)
        .map(Internship::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assessment::SkillRatings;

    fn profile(skills: &[(&str, u8)], interests: &[&str]) -> NewAssessment {
        NewAssessment {
            skills: skills
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<SkillRatings>(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn seed(id: &str) -> &'static CareerSeed {
        CAREERS.iter().find(|c| c.id == id).unwrap()
    }

    #[test]
    fn test_score_combines_interest_and_skill_points() {
        // Software Engineer: Technology; Programming, Problem Solving, Communication
        let p = profile(
            &[("programming", 3), ("problemsolving", 2), ("communication", 1)],
            &["Technology"],
        );
        // 30 + 30 + 20 + 10
        assert_eq!(career_match_score(seed("software-engineer"), &p), 90);
    }

    #[test]
    fn test_skill_points_capped_at_40_per_skill() {
        let p = profile(&[("communication", 5), ("leadership", 5)], &[]);
        // Education Specialist: Communication + Leadership, no interest hit
        assert_eq!(career_match_score(seed("teacher"), &p), 80);
    }

    #[test]
    fn test_total_score_capped_at_100() {
        let p = profile(
            &[("programming", 5), ("problemsolving", 5), ("communication", 5)],
            &["Technology"],
        );
        assert_eq!(career_match_score(seed("fullstack-developer"), &p), 100);
    }

    #[test]
    fn test_missing_skills_score_zero() {
        let p = profile(&[], &[]);
        assert_eq!(career_match_score(seed("data-analyst"), &p), 0);
    }

    #[test]
    fn test_rank_careers_returns_top_three_sorted() {
        let p = profile(&[("communication", 2)], &["Education"]);
        let ranked = rank_careers(&p);
        assert_eq!(ranked.len(), TOP_CAREERS);
        assert!(ranked
            .windows(2)
            .all(|w| w[0].match_score >= w[1].match_score));
        assert_eq!(ranked[0].id, "teacher");
        assert_eq!(ranked[0].match_score, 50);
    }

    #[test]
    fn test_rank_careers_ties_keep_catalogue_order() {
        let p = profile(&[], &[]);
        let ranked = rank_careers(&p);
        let ids: Vec<_> = ranked.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["fullstack-developer", "ux-ui-designer", "data-analyst"]);
    }

    #[test]
    fn test_select_courses_filters_by_interest_and_sorts_by_rating() {
        let p = profile(&[], &["technology"]);
        let courses = select_courses(&p);
        assert!(!courses.is_empty());
        assert!(courses.len() <= TOP_COURSES);
        assert!(courses
            .iter()
            .all(|c| c.category.to_lowercase().contains("technology")
                || c.title.to_lowercase().contains("technology")));
        assert!(courses.windows(2).all(|w| w[0].rating >= w[1].rating));
        assert_eq!(courses[0].id, "machine-learning-intro");
    }

    #[test]
    fn test_select_courses_no_interests_is_empty() {
        assert!(select_courses(&profile(&[], &[])).is_empty());
    }

    #[test]
    fn test_select_internships_keeps_catalogue_order() {
        let p = profile(&[], &["Business", "Technology"]);
        let internships = select_internships(&p);
        let ids: Vec<_> = internships.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["google-swe-intern", "deloitte-business-intern", "microsoft-data-intern"]
        );
    }

    #[test]
    fn test_select_internships_matches_multi_word_interest() {
        let internships = select_internships(&profile(&[], &["Social Impact"]));
        assert_eq!(internships.len(), 1);
        assert_eq!(internships[0].company, "UNICEF");
    }
}
