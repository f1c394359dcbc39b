use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Storage, StorageError};
use crate::models::assessment::{Assessment, NewAssessment};
use crate::models::progress::{NewUserProgress, ProgressChange, UserProgress};
use crate::models::recommendation::{NewRecommendation, Recommendation};

/// Process-lifetime storage. Everything is lost on restart.
#[derive(Default)]
pub struct MemStorage {
    assessments: RwLock<HashMap<Uuid, Assessment>>,
    recommendations: RwLock<HashMap<Uuid, Recommendation>>,
    progress: RwLock<HashMap<Uuid, UserProgress>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn create_assessment(&self, new: NewAssessment) -> Result<Assessment, StorageError> {
        let assessment = Assessment::new(new);
        self.assessments
            .write()
            .await
            .insert(assessment.id, assessment.clone());
        Ok(assessment)
    }

    async fn get_assessment(&self, id: Uuid) -> Result<Option<Assessment>, StorageError> {
        Ok(self.assessments.read().await.get(&id).cloned())
    }

    async fn get_assessment_by_user(
        &self,
        user_id: &str,
    ) -> Result<Option<Assessment>, StorageError> {
        // Latest submission wins when a user has several.
        Ok(self
            .assessments
            .read()
            .await
            .values()
            .filter(|a| a.profile.user_id.as_deref() == Some(user_id))
            .max_by_key(|a| a.completed_at)
            .cloned())
    }

    async fn create_recommendation(
        &self,
        new: NewRecommendation,
    ) -> Result<Recommendation, StorageError> {
        let recommendation = Recommendation::new(new);
        self.recommendations
            .write()
            .await
            .insert(recommendation.id, recommendation.clone());
        Ok(recommendation)
    }

    async fn get_recommendation(&self, id: Uuid) -> Result<Option<Recommendation>, StorageError> {
        Ok(self.recommendations.read().await.get(&id).cloned())
    }

    async fn get_recommendation_by_assessment(
        &self,
        assessment_id: Uuid,
    ) -> Result<Option<Recommendation>, StorageError> {
        Ok(self
            .recommendations
            .read()
            .await
            .values()
            .filter(|r| r.assessment_id == assessment_id)
            .max_by_key(|r| r.generated_at)
            .cloned())
    }

    async fn create_progress(&self, new: NewUserProgress) -> Result<UserProgress, StorageError> {
        let mut records = self.progress.write().await;
        if records.values().any(|p| p.user_id == new.user_id) {
            return Err(StorageError::Conflict(format!(
                "Progress for user {} already exists",
                new.user_id
            )));
        }
        let progress = UserProgress::new(new);
        records.insert(progress.id, progress.clone());
        Ok(progress)
    }

    async fn get_progress(&self, user_id: &str) -> Result<Option<UserProgress>, StorageError> {
        Ok(self
            .progress
            .read()
            .await
            .values()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn update_progress(
        &self,
        user_id: &str,
        change: ProgressChange,
    ) -> Result<UserProgress, StorageError> {
        let mut progress = self.progress.write().await;
        let existing = progress
            .values_mut()
            .find(|p| p.user_id == user_id)
            .ok_or_else(|| StorageError::NotFound("User progress not found".to_string()))?;
        existing.apply_change(change);
        Ok(existing.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::progress::ProgressUpdate;
    use crate::models::recommendation::{RecommendationSet, RecommendationSource, SkillsGapReport};

    fn empty_set() -> RecommendationSet {
        RecommendationSet {
            career_paths: vec![],
            courses: vec![],
            internships: vec![],
            skills_gap: SkillsGapReport::default(),
            source: RecommendationSource::Rules,
        }
    }

    #[tokio::test]
    async fn test_assessment_create_then_get() {
        let store = MemStorage::new();
        let created = store
            .create_assessment(NewAssessment::default())
            .await
            .unwrap();
        let fetched = store.get_assessment(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
        assert!(store.get_assessment(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_assessment_ids_are_unique() {
        let store = MemStorage::new();
        let a = store.create_assessment(NewAssessment::default()).await.unwrap();
        let b = store.create_assessment(NewAssessment::default()).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_assessment_by_user() {
        let store = MemStorage::new();
        let new = NewAssessment {
            user_id: Some("student-7".to_string()),
            ..Default::default()
        };
        let created = store.create_assessment(new).await.unwrap();
        let found = store.get_assessment_by_user("student-7").await.unwrap();
        assert_eq!(found.map(|a| a.id), Some(created.id));
        assert!(store.get_assessment_by_user("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_recommendation_lookup_by_assessment() {
        let store = MemStorage::new();
        let assessment_id = Uuid::new_v4();
        let created = store
            .create_recommendation(NewRecommendation {
                assessment_id,
                set: empty_set(),
            })
            .await
            .unwrap();
        let by_id = store.get_recommendation(created.id).await.unwrap();
        let by_assessment = store
            .get_recommendation_by_assessment(assessment_id)
            .await
            .unwrap();
        assert_eq!(by_id, by_assessment);
    }

    #[tokio::test]
    async fn test_update_progress_missing_user_is_not_found() {
        let store = MemStorage::new();
        let err = store
            .update_progress("ghost", ProgressChange::Merge(ProgressUpdate::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_progress_persists() {
        let store = MemStorage::new();
        store
            .create_progress(NewUserProgress {
                user_id: "u1".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        store
            .update_progress(
                "u1",
                ProgressChange::Merge(ProgressUpdate {
                    completed_courses: Some(vec!["python-basics".to_string()]),
                    ..Default::default()
                }),
            )
            .await
            .unwrap();
        let stored = store.get_progress("u1").await.unwrap().unwrap();
        assert_eq!(stored.completed_courses, vec!["python-basics"]);
    }

    #[tokio::test]
    async fn test_create_progress_twice_is_conflict() {
        let store = MemStorage::new();
        let new = NewUserProgress {
            user_id: "u1".to_string(),
            ..Default::default()
        };
        store.create_progress(new.clone()).await.unwrap();
        let err = store.create_progress(new).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_concurrent_course_completions_are_all_kept() {
        let store = Arc::new(MemStorage::new());
        store
            .create_progress(NewUserProgress {
                user_id: "u1".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let tasks: Vec<_> = (0..20)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .update_progress("u1", ProgressChange::CompleteCourse(format!("course-{i}")))
                        .await
                        .unwrap();
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let stored = store.get_progress("u1").await.unwrap().unwrap();
        assert_eq!(stored.completed_courses.len(), 20);
    }
}
