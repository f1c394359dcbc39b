//! Assessment wizard — server-side drafts for the five-step questionnaire.
//!
//! Steps: 1 Skills, 2 Interests, 3 Goals, 4 Learning style, 5 Detailed questions.
//! Navigation clamps to the valid range. A wizard is locked while its
//! submission is in flight and frozen once submitted, until reset.

pub mod handlers;
pub mod store;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::assessment::{
    normalize_skill_key, NewAssessment, MAX_SKILL_LEVEL, MIN_SKILL_LEVEL,
};

pub use store::WizardStore;

pub const TOTAL_STEPS: u8 = 5;

const STEP_TITLES: [&str; TOTAL_STEPS as usize] = [
    "Skills",
    "Interests",
    "Goals",
    "Learning style",
    "Detailed questions",
];

/// Text fields the wizard can set one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardField {
    UserId,
    CareerGoals,
    EducationLevel,
    FieldOfStudy,
    LearningStyle,
    WorkEnvironment,
    SalaryExpectations,
    WorkLifeBalance,
    GeographicPreference,
    PreviousExperience,
    CareerChangeReason,
}

/// One edit from a PATCH body, tagged by `op`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum WizardEdit {
    Skill { key: String, value: i64 },
    Interest { id: String, checked: bool },
    Interests { values: Vec<String> },
    Field {
        field: WizardField,
        #[serde(default)]
        value: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentWizard {
    pub draft: NewAssessment,
    pub current_step: u8,
    pub completed: bool,
    /// Claimed by an in-flight submit.
    pub submitting: bool,
    /// Set once the draft has been submitted.
    pub assessment_id: Option<Uuid>,
}

impl Default for AssessmentWizard {
    fn default() -> Self {
        Self {
            draft: NewAssessment::default(),
            current_step: 1,
            completed: false,
            submitting: false,
            assessment_id: None,
        }
    }
}

impl AssessmentWizard {
    pub fn next_step(&mut self) {
        self.current_step = (self.current_step + 1).min(TOTAL_STEPS);
    }

    pub fn prev_step(&mut self) {
        self.current_step = self.current_step.saturating_sub(1).max(1);
    }

    /// Sets a skill level, clamped to the slider range.
    pub fn update_skill(&mut self, key: &str, value: i64) {
        let level = value.clamp(MIN_SKILL_LEVEL as i64, MAX_SKILL_LEVEL as i64) as u8;
        self.draft.skills.insert(normalize_skill_key(key), level);
    }

    pub fn set_interest(&mut self, id: &str, checked: bool) {
        if checked {
            if !self.draft.has_interest(id) {
                self.draft.interests.push(id.to_string());
            }
        } else {
            self.draft.interests.retain(|i| i != id);
        }
    }

    pub fn set_interests(&mut self, values: Vec<String>) {
        self.draft.interests.clear();
        for value in values {
            self.set_interest(&value, true);
        }
    }

    /// Required fields take the value as given (empty when absent); optional
    /// fields are cleared when the value is absent or blank.
    pub fn update_field(&mut self, field: WizardField, value: Option<String>) {
        let draft = &mut self.draft;
        let optional = value.clone().filter(|v| !v.trim().is_empty());
        match field {
            WizardField::CareerGoals => draft.career_goals = value.unwrap_or_default(),
            WizardField::EducationLevel => draft.education_level = value.unwrap_or_default(),
            WizardField::LearningStyle => draft.learning_style = value.unwrap_or_default(),
            WizardField::UserId => draft.user_id = optional,
            WizardField::FieldOfStudy => draft.field_of_study = optional,
            WizardField::WorkEnvironment => draft.work_environment = optional,
            WizardField::SalaryExpectations => draft.salary_expectations = optional,
            WizardField::WorkLifeBalance => draft.work_life_balance = optional,
            WizardField::GeographicPreference => draft.geographic_preference = optional,
            WizardField::PreviousExperience => draft.previous_experience = optional,
            WizardField::CareerChangeReason => draft.career_change_reason = optional,
        }
    }

    pub fn apply(&mut self, edit: WizardEdit) {
        match edit {
            WizardEdit::Skill { key, value } => self.update_skill(&key, value),
            WizardEdit::Interest { id, checked } => self.set_interest(&id, checked),
            WizardEdit::Interests { values } => self.set_interests(values),
            WizardEdit::Field { field, value } => self.update_field(field, value),
        }
    }

    pub fn progress_percentage(&self) -> u8 {
        (self.current_step as u32 * 100 / TOTAL_STEPS as u32) as u8
    }

    pub fn step_title(&self) -> &'static str {
        STEP_TITLES[(self.current_step.clamp(1, TOTAL_STEPS) - 1) as usize]
    }

    /// No edits, navigation or further submits are accepted while locked.
    pub fn is_locked(&self) -> bool {
        self.completed || self.submitting
    }

    /// Marks the wizard as being submitted. False when it is already locked.
    pub fn claim_for_submit(&mut self) -> bool {
        if self.is_locked() {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Undoes a claim after a failed submit so the draft can be fixed and retried.
    pub fn release_claim(&mut self) {
        self.submitting = false;
    }

    pub fn complete(&mut self, assessment_id: Uuid) {
        self.submitting = false;
        self.completed = true;
        self.assessment_id = Some(assessment_id);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn view(&self, id: Uuid) -> WizardView {
        WizardView {
            id,
            current_step: self.current_step,
            total_steps: TOTAL_STEPS,
            step_title: self.step_title(),
            progress_percentage: self.progress_percentage(),
            completed: self.completed,
            submitting: self.submitting,
            assessment_id: self.assessment_id,
            draft: self.draft.clone(),
        }
    }
}

/// What the API returns for a wizard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub id: Uuid,
    pub current_step: u8,
    pub total_steps: u8,
    pub step_title: &'static str,
    pub progress_percentage: u8,
    pub completed: bool,
    pub submitting: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_id: Option<Uuid>,
    pub draft: NewAssessment,
}
