use tracing::info;

use crate::errors::AppError;
use crate::models::assessment::Assessment;
use crate::models::recommendation::{NewRecommendation, Recommendation};
use crate::recommendation::recommender::Recommender;
use crate::storage::Storage;

/// Returns the stored recommendation for an assessment, generating and
/// persisting one on first request. Repeated submissions reuse the cached set.
pub async fn recommendation_for(
    storage: &dyn Storage,
    recommender: &dyn Recommender,
    assessment: &Assessment,
) -> Result<Recommendation, AppError> {
    if let Some(existing) = storage
        .get_recommendation_by_assessment(assessment.id)
        .await?
    {
        info!(
            "Reusing recommendation {} for assessment {}",
            existing.id, assessment.id
        );
        return Ok(existing);
    }

    let set = recommender.recommend(&assessment.profile).await?;
    let recommendation = storage
        .create_recommendation(NewRecommendation {
            assessment_id: assessment.id,
            set,
        })
        .await?;

    info!(
        "Recommendation {} generated for assessment {} (backend: {}, source: {})",
        recommendation.id,
        assessment.id,
        recommender.backend(),
        recommendation.set.source.as_str()
    );

    Ok(recommendation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assessment::NewAssessment;
    use crate::recommendation::recommender::RuleBasedRecommender;
    use crate::storage::MemStorage;

    #[tokio::test]
    async fn test_generates_then_reuses() {
        let storage = MemStorage::new();
        let assessment = storage
            .create_assessment(NewAssessment::default())
            .await
            .unwrap();

        let first = recommendation_for(&storage, &RuleBasedRecommender, &assessment)
            .await
            .unwrap();
        let second = recommendation_for(&storage, &RuleBasedRecommender, &assessment)
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.assessment_id, assessment.id);
        assert_eq!(first.set.career_paths.len(), 3);
    }
}
