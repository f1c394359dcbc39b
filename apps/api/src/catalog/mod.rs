//! Static catalogue of careers, courses and internships.
//!
//! The rule-based matcher ranks these directly; the AI advisor falls back to
//! them when the model is unavailable.

mod careers;
mod courses;
pub mod handlers;
mod internships;

use serde::Serialize;

use crate::models::recommendation::{CareerPath, Course, Internship};

pub use careers::CAREERS;
pub use courses::COURSES;
pub use internships::INTERNSHIPS;

#[derive(Debug, Clone, Serialize)]
pub struct InterestCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const INTEREST_CATEGORIES: &[InterestCategory] = &[
    InterestCategory {
        id: "Technology",
        label: "Technology",
        description: "Software, AI, Cybersecurity",
    },
    InterestCategory {
        id: "Business",
        label: "Business",
        description: "Finance, Management, Consulting",
    },
    InterestCategory {
        id: "Creative",
        label: "Creative",
        description: "Design, Marketing, Content",
    },
    InterestCategory {
        id: "Science",
        label: "Science",
        description: "Research, Healthcare, Engineering",
    },
    InterestCategory {
        id: "Education",
        label: "Education",
        description: "Teaching, Training, Academia",
    },
    InterestCategory {
        id: "Social Impact",
        label: "Social Impact",
        description: "Non-profit, Policy, Community",
    },
];

pub const LEARNING_STYLES: &[&str] = &["visual", "hands-on", "reading", "auditory"];

/// Industry-standard target level per skill, with the label shown to users.
pub const INDUSTRY_TARGETS: &[(&str, &str, u8)] = &[
    ("programming", "Programming", 4),
    ("dataanalysis", "Data Analysis", 4),
    ("digitalmarketing", "Digital Marketing", 3),
    ("communication", "Communication", 4),
    ("leadership", "Leadership", 3),
    ("problemsolving", "Problem Solving", 4),
];

pub fn is_known_interest(interest: &str) -> bool {
    INTEREST_CATEGORIES.iter().any(|c| c.id == interest)
}

#[derive(Debug)]
pub struct CareerSeed {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub baseline_score: u32,
    pub salary: &'static str,
    pub growth: &'static str,
    pub icon: &'static str,
    pub required_skills: &'static [&'static str],
    pub matching_interests: &'static [&'static str],
}

impl CareerSeed {
    pub fn to_career_path(&self, match_score: u32) -> CareerPath {
        CareerPath {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            match_score,
            salary: self.salary.to_string(),
            growth: self.growth.to_string(),
            icon: self.icon.to_string(),
            required_skills: self.required_skills.iter().map(|s| s.to_string()).collect(),
            matching_interests: self
                .matching_interests
                .iter()
                .map(|s| s.to_string())
                .collect(),
            learning_path: vec![],
            time_to_achieve: None,
            industry_insights: None,
            key_responsibilities: vec![],
        }
    }
}

#[derive(Debug)]
pub struct CourseSeed {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub rating: f32,
    pub duration: &'static str,
    pub students: &'static str,
    pub price: &'static str,
}

impl From<&CourseSeed> for Course {
    fn from(seed: &CourseSeed) -> Self {
        Course {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            category: seed.category.to_string(),
            rating: seed.rating,
            duration: seed.duration.to_string(),
            students: Some(seed.students.to_string()),
            price: Some(seed.price.to_string()),
            difficulty: None,
            provider: None,
            priority: None,
            skills_gained: vec![],
            prerequisites: vec![],
        }
    }
}

#[derive(Debug)]
pub struct InternshipSeed {
    pub id: &'static str,
    pub company: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub stipend: &'static str,
    pub schedule: &'static str,
    pub icon: &'static str,
    pub field: &'static str,
}

impl From<&InternshipSeed> for Internship {
    fn from(seed: &InternshipSeed) -> Self {
        Internship {
            id: seed.id.to_string(),
            company: seed.company.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            location: seed.location.to_string(),
            duration: seed.duration.to_string(),
            stipend: seed.stipend.to_string(),
            schedule: Some(seed.schedule.to_string()),
            icon: Some(seed.icon.to_string()),
            field: seed.field.to_string(),
            requirements: vec![],
            learning_outcomes: vec![],
            application_deadline: None,
        }
    }
}

/// Full career list at each career's baseline score.
pub fn all_careers() -> Vec<CareerPath> {
    CAREERS
        .iter()
        .map(|c| c.to_career_path(c.baseline_score))
        .collect()
}

pub fn all_courses() -> Vec<Course> {
    COURSES.iter().map(Course::from).collect()
}

pub fn all_internships() -> Vec<Internship> {
    INTERNSHIPS.iter().map(Internship::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_ids_unique() {
        let careers: HashSet<_> = CAREERS.iter().map(|c| c.id).collect();
        let courses: HashSet<_> = COURSES.iter().map(|c| c.id).collect();
        let internships: HashSet<_> = INTERNSHIPS.iter().map(|i| i.id).collect();
        assert_eq!(careers.len(), CAREERS.len());
        assert_eq!(courses.len(), COURSES.len());
        assert_eq!(internships.len(), INTERNSHIPS.len());
    }

    #[test]
    fn test_career_interests_are_known_categories() {
        for career in CAREERS {
            for interest in career.matching_interests {
                assert!(
                    is_known_interest(interest),
                    "{} lists unknown interest {interest}",
                    career.id
                );
            }
        }
    }

    #[test]
    fn test_every_interest_has_a_course_and_internship() {
        for category in INTEREST_CATEGORIES {
            let needle = category.id.to_lowercase();
            assert!(COURSES
                .iter()
                .any(|c| c.category.to_lowercase().contains(&needle)));
            assert!(INTERNSHIPS
                .iter()
                .any(|i| i.field.to_lowercase().contains(&needle)));
        }
    }

    #[test]
    fn test_course_ratings_in_range() {
        assert!(COURSES.iter().all(|c| (0.0..=5.0).contains(&c.rating)));
    }
}
