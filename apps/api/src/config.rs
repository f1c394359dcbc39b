use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_MODEL;

const DEFAULT_WIZARD_TTL_SECS: u64 = 24 * 60 * 60;

/// Which recommendation engine serves requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommenderKind {
    Ai,
    Rules,
}

/// Application configuration loaded from environment variables.
/// Every key is optional; missing ones fall back to local defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Absent: records live in memory for the lifetime of the process.
    pub database_url: Option<String>,
    /// Absent: the rule-based engine is used regardless of `RECOMMENDER`.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    /// Overrides the Generative Language API root (proxies, local gateways).
    pub gemini_api_base: Option<String>,
    pub recommender: RecommenderKind,
    /// Wizard drafts untouched for this long are dropped.
    pub wizard_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let gemini_api_key = optional_env("GEMINI_API_KEY");
        let recommender = match optional_env("RECOMMENDER") {
            Some(raw) => parse_recommender(&raw)?,
            None if gemini_api_key.is_some() => RecommenderKind::Ai,
            None => RecommenderKind::Rules,
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            database_url: optional_env("DATABASE_URL"),
            gemini_model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_api_base: optional_env("GEMINI_API_BASE"),
            gemini_api_key,
            recommender,
            wizard_ttl: Duration::from_secs(
                std::env::var("WIZARD_TTL_SECS")
                    .unwrap_or_else(|_| DEFAULT_WIZARD_TTL_SECS.to_string())
                    .parse::<u64>()
                    .context("WIZARD_TTL_SECS must be a whole number of seconds")?,
            ),
        })
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_recommender(raw: &str) -> Result<RecommenderKind> {
    match raw.to_ascii_lowercase().as_str() {
        "ai" => Ok(RecommenderKind::Ai),
        "rules" => Ok(RecommenderKind::Rules),
        other => bail!("RECOMMENDER must be 'ai' or 'rules', got '{other}'"),
    }
}
