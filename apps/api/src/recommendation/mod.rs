// Recommendation engine: rule-based matching, skills-gap analysis, and the
// Gemini-backed advisor with per-section rule fallback.
// All model calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod matching;
pub mod prompts;
pub mod recommender;
pub mod skills_gap;
