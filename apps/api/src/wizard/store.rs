use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::wizard::AssessmentWizard;

struct Draft {
    wizard: AssessmentWizard,
    touched: Instant,
}

/// In-process wizard drafts keyed by wizard id.
///
/// Drafts untouched for longer than `ttl` are dropped whenever a new wizard
/// is created, so the map only grows with recent activity. Drafts with a
/// submit in flight are never dropped.
pub struct WizardStore {
    drafts: RwLock<HashMap<Uuid, Draft>>,
    ttl: Duration,
}

impl WizardStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            drafts: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub async fn create(&self) -> (Uuid, AssessmentWizard) {
        let id = Uuid::new_v4();
        let wizard = AssessmentWizard::default();

        let mut drafts = self.drafts.write().await;
        let before = drafts.len();
        drafts.retain(|_, d| d.wizard.submitting || d.touched.elapsed() < self.ttl);
        if drafts.len() < before {
            debug!("Dropped {} expired wizard drafts", before - drafts.len());
        }

        drafts.insert(
            id,
            Draft {
                wizard: wizard.clone(),
                touched: Instant::now(),
            },
        );
        (id, wizard)
    }

    pub async fn get(&self, id: Uuid) -> Option<AssessmentWizard> {
        self.drafts.read().await.get(&id).map(|d| d.wizard.clone())
    }

    /// Runs `f` against the stored wizard under the write lock.
    /// `None` when no wizard has this id.
    pub async fn update<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut AssessmentWizard) -> R,
    ) -> Option<R> {
        self.drafts.write().await.get_mut(&id).map(|draft| {
            draft.touched = Instant::now();
            f(&mut draft.wizard)
        })
    }

    pub async fn draft_count(&self) -> usize {
        self.drafts.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: Duration = Duration::from_secs(24 * 60 * 60);

    #[tokio::test]
    async fn test_create_update_get() {
        let store = WizardStore::new(DAY);
        let (id, wizard) = store.create().await;
        assert_eq!(wizard.current_step, 1);

        let step = store
            .update(id, |w| {
                w.next_step();
                w.current_step
            })
            .await;
        assert_eq!(step, Some(2));
        assert_eq!(store.get(id).await.unwrap().current_step, 2);
    }

    #[tokio::test]
    async fn test_unknown_id() {
        let store = WizardStore::new(DAY);
        assert!(store.get(Uuid::new_v4()).await.is_none());
        assert!(store.update(Uuid::new_v4(), |w| w.reset()).await.is_none());
    }

    #[tokio::test]
    async fn test_expired_drafts_dropped_on_create() {
        let store = WizardStore::new(Duration::ZERO);
        let (stale, _) = store.create().await;
        let (fresh, _) = store.create().await;

        assert!(store.get(stale).await.is_none());
        assert!(store.get(fresh).await.is_some());
        assert_eq!(store.draft_count().await, 1);
    }

    #[tokio::test]
    async fn test_submitting_drafts_survive_expiry() {
        let store = WizardStore::new(Duration::ZERO);
        let (claimed, _) = store.create().await;
        store.update(claimed, |w| w.claim_for_submit()).await;

        store.create().await;
        assert!(store.get(claimed).await.is_some());
        assert_eq!(store.draft_count().await, 2);
    }
}
