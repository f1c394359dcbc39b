mod assessment;
mod catalog;
mod config;
mod errors;
mod llm_client;
mod models;
mod progress;
mod recommendation;
mod routes;
mod state;
mod storage;
mod wizard;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, RecommenderKind};
use crate::llm_client::LlmClient;
use crate::recommendation::recommender::{AiRecommender, Recommender, RuleBasedRecommender};
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{postgres::create_pool, MemStorage, PgStorage, Storage};
use crate::wizard::WizardStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    let storage = build_storage(&config).await?;
    let recommender = build_recommender(&config)?;
    info!("Recommender initialized (backend: {})", recommender.backend());

    let state = AppState {
        storage,
        recommender,
        wizards: Arc::new(WizardStore::new(config.wizard_ttl)),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// PostgreSQL when DATABASE_URL is set, otherwise process-local memory.
async fn build_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            let storage = PgStorage::new(pool);
            storage.migrate().await?;
            info!("PostgreSQL storage initialized");
            Ok(Arc::new(storage))
        }
        None => {
            info!("DATABASE_URL not set; using in-memory storage");
            Ok(Arc::new(MemStorage::new()))
        }
    }
}

fn build_recommender(config: &Config) -> Result<Arc<dyn Recommender>> {
    match (config.recommender, &config.gemini_api_key) {
        (RecommenderKind::Ai, Some(key)) => {
            let mut llm = LlmClient::new(key.clone(), config.gemini_model.clone())?;
            if let Some(base) = &config.gemini_api_base {
                info!("Using Gemini API base {base}");
                llm = llm.with_base_url(base.clone());
            }
            info!("LLM client initialized (model: {})", llm.model());
            Ok(Arc::new(AiRecommender::new(llm)))
        }
        (RecommenderKind::Ai, None) => {
            warn!("RECOMMENDER=ai but GEMINI_API_KEY is not set; using rule-based engine");
            Ok(Arc::new(RuleBasedRecommender))
        }
        (RecommenderKind::Rules, _) => Ok(Arc::new(RuleBasedRecommender)),
    }
}
