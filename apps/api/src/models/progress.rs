use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type Milestones = BTreeMap<String, bool>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub id: Uuid,
    pub user_id: String,
    pub completed_courses: Vec<String>,
    pub achievements: Vec<String>,
    pub milestones: Milestones,
    pub progress_percentage: u8,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserProgress {
    pub user_id: String,
    #[serde(default)]
    pub completed_courses: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub milestones: Milestones,
    #[serde(default)]
    pub progress_percentage: u8,
}

/// Partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    #[serde(default)]
    pub completed_courses: Option<Vec<String>>,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
    #[serde(default)]
    pub milestones: Option<Milestones>,
    #[serde(default)]
    pub progress_percentage: Option<u8>,
}

/// A change applied to a stored record inside the storage lock or transaction.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressChange {
    Merge(ProgressUpdate),
    /// Appends a course unless it is already recorded.
    CompleteCourse(String),
    /// Sets one milestone and recomputes the percentage from all milestones.
    SetMilestone { name: String, completed: bool },
}

impl UserProgress {
    pub fn new(new: NewUserProgress) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            completed_courses: new.completed_courses,
            achievements: new.achievements,
            milestones: new.milestones,
            progress_percentage: new.progress_percentage.min(100),
            updated_at: Utc::now(),
        }
    }

    /// Merges a partial update into this record and refreshes `updated_at`.
    pub fn apply(&mut self, update: ProgressUpdate) {
        if let Some(courses) = update.completed_courses {
            self.completed_courses = courses;
        }
        if let Some(achievements) = update.achievements {
            self.achievements = achievements;
        }
        if let Some(milestones) = update.milestones {
            self.milestones = milestones;
        }
        if let Some(pct) = update.progress_percentage {
            self.progress_percentage = pct.min(100);
        }
        self.updated_at = Utc::now();
    }

    /// Applies a change. Returns false when it was a no-op, in which case
    /// `updated_at` is left alone.
    pub fn apply_change(&mut self, change: ProgressChange) -> bool {
        match change {
            ProgressChange::Merge(update) => self.apply(update),
            ProgressChange::CompleteCourse(course_id) => {
                if self.completed_courses.contains(&course_id) {
                    return false;
                }
                self.completed_courses.push(course_id);
                self.updated_at = Utc::now();
            }
            ProgressChange::SetMilestone { name, completed } => {
                self.milestones.insert(name, completed);
                self.progress_percentage = self.milestone_percentage();
                self.updated_at = Utc::now();
            }
        }
        true
    }

    /// Share of milestones completed, as a whole percentage. 0 when there are none.
    pub fn milestone_percentage(&self) -> u8 {
        let total = self.milestones.len();
        if total == 0 {
            return 0;
        }
        let done = self.milestones.values().filter(|m| **m).count();
        ((done * 100) as f64 / total as f64).round() as u8
    }
}
