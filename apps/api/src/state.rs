use std::sync::Arc;

use crate::config::Config;
use crate::recommendation::recommender::Recommender;
use crate::storage::Storage;
use crate::wizard::WizardStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-memory by default; PostgreSQL when DATABASE_URL is set.
    pub storage: Arc<dyn Storage>,
    /// Pluggable engine. Default: RuleBasedRecommender. AiRecommender when a Gemini key is set.
    pub recommender: Arc<dyn Recommender>,
    pub wizards: Arc<WizardStore>,
    pub config: Config,
}
