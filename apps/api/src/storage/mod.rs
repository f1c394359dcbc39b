//! Storage — the key-value collaborator behind every handler.
//!
//! `AppState` holds an `Arc<dyn Storage>`. `MemStorage` keeps records for the
//! lifetime of the process; `PgStorage` persists them in PostgreSQL when
//! `DATABASE_URL` is configured.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::assessment::{Assessment, NewAssessment};
use crate::models::progress::{NewUserProgress, ProgressChange, UserProgress};
use crate::models::recommendation::{NewRecommendation, Recommendation};

pub mod memory;
pub mod postgres;

pub use memory::MemStorage;
pub use postgres::PgStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("backend failure: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::Backend(err.to_string())
    }
}

#[async_trait]
pub trait Storage: Send + Sync {
    async fn create_assessment(&self, new: NewAssessment) -> Result<Assessment, StorageError>;
    async fn get_assessment(&self, id: Uuid) -> Result<Option<Assessment>, StorageError>;
    async fn get_assessment_by_user(
        &self,
        user_id: &str,
    ) -> Result<Option<Assessment>, StorageError>;

    async fn create_recommendation(
        &self,
        new: NewRecommendation,
    ) -> Result<Recommendation, StorageError>;
    async fn get_recommendation(&self, id: Uuid) -> Result<Option<Recommendation>, StorageError>;
    async fn get_recommendation_by_assessment(
        &self,
        assessment_id: Uuid,
    ) -> Result<Option<Recommendation>, StorageError>;

    /// Fails with `Conflict` when the user already has a record.
    async fn create_progress(&self, new: NewUserProgress) -> Result<UserProgress, StorageError>;
    async fn get_progress(&self, user_id: &str) -> Result<Option<UserProgress>, StorageError>;
    /// Reads, changes and writes the record as one step, so concurrent changes
    /// for the same user never overwrite each other.
    /// Fails with `NotFound` when the user has no progress record yet.
    async fn update_progress(
        &self,
        user_id: &str,
        change: ProgressChange,
    ) -> Result<UserProgress, StorageError>;
}
