use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use super::{Storage, StorageError};
use crate::models::assessment::{Assessment, NewAssessment, SkillRatings};
use crate::models::progress::{Milestones, NewUserProgress, ProgressChange, UserProgress};
use crate::models::recommendation::{
    CareerPath, Course, Internship, NewRecommendation, Recommendation, RecommendationSet,
    RecommendationSource, SkillsGapReport,
};

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> anyhow::Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

const SCHEMA: &str = include_str!("../../migrations/0001_init.sql");

/// PostgreSQL-backed storage. Schema: `migrations/0001_init.sql`.
#[derive(Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the bundled schema. Statements are idempotent.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        for statement in SCHEMA
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        info!("Database schema is up to date");
        Ok(())
    }
}

#[derive(Debug, FromRow)]
struct AssessmentRow {
    id: Uuid,
    user_id: Option<String>,
    skills: Json<SkillRatings>,
    interests: Json<Vec<String>>,
    career_goals: String,
    education_level: String,
    field_of_study: Option<String>,
    learning_style: String,
    work_environment: Option<String>,
    salary_expectations: Option<String>,
    work_life_balance: Option<String>,
    geographic_preference: Option<String>,
    previous_experience: Option<String>,
    career_change_reason: Option<String>,
    completed_at: DateTime<Utc>,
}

impl From<AssessmentRow> for Assessment {
    fn from(row: AssessmentRow) -> Self {
        Assessment {
            id: row.id,
            profile: NewAssessment {
                user_id: row.user_id,
                skills: row.skills.0,
                interests: row.interests.0,
                career_goals: row.career_goals,
                education_level: row.education_level,
                field_of_study: row.field_of_study,
                learning_style: row.learning_style,
                work_environment: row.work_environment,
                salary_expectations: row.salary_expectations,
                work_life_balance: row.work_life_balance,
                geographic_preference: row.geographic_preference,
                previous_experience: row.previous_experience,
                career_change_reason: row.career_change_reason,
            },
            completed_at: row.completed_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct RecommendationRow {
    id: Uuid,
    assessment_id: Uuid,
    career_paths: Json<Vec<CareerPath>>,
    courses: Json<Vec<Course>>,
    internships: Json<Vec<Internship>>,
    skills_gap: Json<SkillsGapReport>,
    source: String,
    generated_at: DateTime<Utc>,
}

impl TryFrom<RecommendationRow> for Recommendation {
    type Error = StorageError;

    fn try_from(row: RecommendationRow) -> Result<Self, Self::Error> {
        let source = RecommendationSource::parse(&row.source).ok_or_else(|| {
            StorageError::Backend(format!("unknown recommendation source '{}'", row.source))
        })?;
        Ok(Recommendation {
            id: row.id,
            assessment_id: row.assessment_id,
            set: RecommendationSet {
                career_paths: row.career_paths.0,
                courses: row.courses.0,
                internships: row.internships.0,
                skills_gap: row.skills_gap.0,
                source,
            },
            generated_at: row.generated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ProgressRow {
    id: Uuid,
    user_id: String,
    completed_courses: Json<Vec<String>>,
    achievements: Json<Vec<String>>,
    milestones: Json<Milestones>,
    progress_percentage: i32,
    updated_at: DateTime<Utc>,
}

impl From<ProgressRow> for UserProgress {
    fn from(row: ProgressRow) -> Self {
        UserProgress {
            id: row.id,
            user_id: row.user_id,
            completed_courses: row.completed_courses.0,
            achievements: row.achievements.0,
            milestones: row.milestones.0,
            progress_percentage: row.progress_percentage.clamp(0, 100) as u8,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn create_assessment(&self, new: NewAssessment) -> Result<Assessment, StorageError> {
        let assessment = Assessment::new(new);
        let p = &assessment.profile;

        sqlx::query(
            r#"
            INSERT INTO assessments
                (id, user_id, skills, interests, career_goals, education_level,
                 field_of_study, learning_style, work_environment, salary_expectations,
                 work_life_balance, geographic_preference, previous_experience,
                 career_change_reason, completed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(assessment.id)
        .bind(&p.user_id)
        .bind(Json(&p.skills))
        .bind(Json(&p.interests))
        .bind(&p.career_goals)
        .bind(&p.education_level)
        .bind(&p.field_of_study)
        .bind(&p.learning_style)
        .bind(&p.work_environment)
        .bind(&p.salary_expectations)
        .bind(&p.work_life_balance)
        .bind(&p.geographic_preference)
        .bind(&p.previous_experience)
        .bind(&p.career_change_reason)
        .bind(assessment.completed_at)
        .execute(&self.pool)
        .await?;

        Ok(assessment)
    }

    async fn get_assessment(&self, id: Uuid) -> Result<Option<Assessment>, StorageError> {
        let row: Option<AssessmentRow> = sqlx::query_as("SELECT * FROM assessments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Assessment::from))
    }

    async fn get_assessment_by_user(
        &self,
        user_id: &str,
    ) -> Result<Option<Assessment>, StorageError> {
        let row: Option<AssessmentRow> = sqlx::query_as(
            "SELECT * FROM assessments WHERE user_id = $1 ORDER BY completed_at DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Assessment::from))
    }

    async fn create_recommendation(
        &self,
        new: NewRecommendation,
    ) -> Result<Recommendation, StorageError> {
        let recommendation = Recommendation::new(new);
        let set = &recommendation.set;

        sqlx::query(
            r#"
            INSERT INTO recommendations
                (id, assessment_id, career_paths, courses, internships, skills_gap,
                 source, generated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(recommendation.id)
        .bind(recommendation.assessment_id)
        .bind(Json(&set.career_paths))
        .bind(Json(&set.courses))
        .bind(Json(&set.internships))
        .bind(Json(&set.skills_gap))
        .bind(set.source.as_str())
        .bind(recommendation.generated_at)
        .execute(&self.pool)
        .await?;

        Ok(recommendation)
    }

    async fn get_recommendation(&self, id: Uuid) -> Result<Option<Recommendation>, StorageError> {
        let row: Option<RecommendationRow> =
            sqlx::query_as("SELECT * FROM recommendations WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(Recommendation::try_from).transpose()
    }

    async fn get_recommendation_by_assessment(
        &self,
        assessment_id: Uuid,
    ) -> Result<Option<Recommendation>, StorageError> {
        let row: Option<RecommendationRow> = sqlx::query_as(
            "SELECT * FROM recommendations WHERE assessment_id = $1 ORDER BY generated_at DESC LIMIT 1",
        )
        .bind(assessment_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Recommendation::try_from).transpose()
    }

    async fn create_progress(&self, new: NewUserProgress) -> Result<UserProgress, StorageError> {
        let progress = UserProgress::new(new);

        let inserted = sqlx::query(
            r#"
            INSERT INTO user_progress
                (id, user_id, completed_courses, achievements, milestones,
                 progress_percentage, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(progress.id)
        .bind(&progress.user_id)
        .bind(Json(&progress.completed_courses))
        .bind(Json(&progress.achievements))
        .bind(Json(&progress.milestones))
        .bind(progress.progress_percentage as i32)
        .bind(progress.updated_at)
        .execute(&self.pool)
        .await?;

        if inserted.rows_affected() == 0 {
            return Err(StorageError::Conflict(format!(
                "Progress for user {} already exists",
                progress.user_id
            )));
        }
        Ok(progress)
    }

    async fn get_progress(&self, user_id: &str) -> Result<Option<UserProgress>, StorageError> {
        let row: Option<ProgressRow> =
            sqlx::query_as("SELECT * FROM user_progress WHERE user_id = $1 LIMIT 1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(UserProgress::from))
    }

    async fn update_progress(
        &self,
        user_id: &str,
        change: ProgressChange,
    ) -> Result<UserProgress, StorageError> {
        let mut tx = self.pool.begin().await?;

        let row: Option<ProgressRow> = sqlx::query_as(
            "SELECT * FROM user_progress WHERE user_id = $1 LIMIT 1 FOR UPDATE",
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let mut progress: UserProgress = row
            .map(UserProgress::from)
            .ok_or_else(|| StorageError::NotFound("User progress not found".to_string()))?;
        if !progress.apply_change(change) {
            tx.commit().await?;
            return Ok(progress);
        }

        sqlx::query(
            r#"
            UPDATE user_progress
            SET completed_courses = $1, achievements = $2, milestones = $3,
                progress_percentage = $4, updated_at = $5
            WHERE id = $6
            "#,
        )
        .bind(Json(&progress.completed_courses))
        .bind(Json(&progress.achievements))
        .bind(Json(&progress.milestones))
        .bind(progress.progress_percentage as i32)
        .bind(progress.updated_at)
        .bind(progress.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(progress)
    }
}
