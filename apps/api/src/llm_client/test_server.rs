//! Local stand-in for the Generative Language API, served on an ephemeral
//! port so client and recommender tests run without network access.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};

use super::LlmClient;

pub const TEST_API_KEY: &str = "test-key";

type Reply = dyn Fn(usize, &Value) -> (StatusCode, Value) + Send + Sync;

#[derive(Clone)]
struct ServerState {
    hits: Arc<AtomicUsize>,
    reply: Arc<Reply>,
}

pub struct FakeGemini {
    base_url: String,
    hits: Arc<AtomicUsize>,
}

impl FakeGemini {
    /// Serves `reply(attempt, request_body)` for every `generateContent` call.
    /// `attempt` counts requests from zero.
    pub async fn start(
        reply: impl Fn(usize, &Value) -> (StatusCode, Value) + Send + Sync + 'static,
    ) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = ServerState {
            hits: hits.clone(),
            reply: Arc::new(reply),
        };
        let app = Router::new().fallback(answer).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        Self {
            base_url: format!("http://{addr}/v1beta/models"),
            hits,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn client(&self) -> LlmClient {
        LlmClient::new(TEST_API_KEY.to_string(), "gemini-test".to_string())
            .unwrap()
            .with_base_url(&self.base_url)
    }
}

async fn answer(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let attempt = state.hits.fetch_add(1, Ordering::SeqCst);
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some(TEST_API_KEY) {
        let (status, value) = api_error(StatusCode::FORBIDDEN, "missing API key");
        return (status, Json(value)).into_response();
    }
    if body["generationConfig"]["responseMimeType"] != "application/json" {
        let (status, value) = api_error(StatusCode::BAD_REQUEST, "expected JSON output");
        return (status, Json(value)).into_response();
    }
    let (status, value) = (state.reply)(attempt, &body);
    (status, Json(value)).into_response()
}

/// A successful response whose first candidate carries `text`.
pub fn candidate(text: &str) -> (StatusCode, Value) {
    (
        StatusCode::OK,
        json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }],
            "usageMetadata": { "promptTokenCount": 10, "candidatesTokenCount": 5 }
        }),
    )
}

/// An error in the API's `{"error": {...}}` shape.
pub fn api_error(status: StatusCode, message: &str) -> (StatusCode, Value) {
    (
        status,
        json!({ "error": { "code": status.as_u16(), "message": message } }),
    )
}

pub fn prompt_of(body: &Value) -> &str {
    body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default()
}
