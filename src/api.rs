//! Local HTTP API for the game frontend.
//!
//! Endpoints:
//! - `GET  /status` — active provider, provider table, cache counters
//! - `POST /speak`  — fire-and-forget speech dispatch
//! - `POST /cancel` — stop playback and fallback speech
//! - `GET  /daily`  — the daily content bundle (optional `?date=YYYY-MM-DD`)

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::content::{StorySegment, VocabularyPair, STORY_SEGMENTS, VOCABULARY_PAIRS, WORDLE_WORDS};
use crate::daily::{DailyCycle, DATE_KEY_FORMAT};
use crate::speech::cache::CacheStats;
use crate::speech::manager::VoiceManager;
use crate::speech::provider::ProviderInfo;

#[derive(Clone)]
pub struct ApiState {
    pub voice: Arc<VoiceManager>,
    pub cycle: DailyCycle,
}

// --- Request/Response types ---

#[derive(Deserialize)]
struct SpeakRequest {
    text: String,
}

#[derive(Deserialize)]
struct DailyQuery {
    date: Option<String>,
}

#[derive(Serialize)]
struct StatusResponse {
    speaking: bool,
    provider: &'static str,
    providers: Vec<ProviderInfo>,
    cache: CacheStats,
}

#[derive(Serialize)]
struct DailyResponse {
    date: String,
    story: StorySegment,
    vocabulary: Vec<VocabularyPair>,
    wordle: String,
}

#[derive(Serialize)]
struct SimpleResponse {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl SimpleResponse {
    fn ok(status: &str) -> Self {
        Self {
            status: status.into(),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            status: "error".into(),
            error: Some(message.into()),
        }
    }
}

/// Build the axum router.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/status", get(handle_status))
        .route("/speak", post(handle_speak))
        .route("/cancel", post(handle_cancel))
        .route("/daily", get(handle_daily))
        .with_state(state)
}

/// Start the API server as a background tokio task.
pub async fn start_api(state: ApiState, port: u16) {
    let app = router(state);
    let addr = format!("127.0.0.1:{port}");
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            warn!("Failed to bind API on {addr}: {e}");
            return;
        }
    };
    info!("API server listening on {addr}");

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            warn!("API server error: {e}");
        }
    });
}

// --- Handlers ---

async fn handle_status(State(state): State<ApiState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        speaking: state.voice.is_speaking(),
        provider: state.voice.current_provider(),
        providers: state.voice.provider_table(),
        cache: state.voice.cache_stats(),
    })
}

async fn handle_speak(
    State(state): State<ApiState>,
    Json(req): Json<SpeakRequest>,
) -> Json<SimpleResponse> {
    if req.text.trim().is_empty() {
        return Json(SimpleResponse::err("empty text"));
    }

    let preview: String = req.text.chars().take(40).collect();
    info!("HTTP /speak: \"{preview}\" ({} chars)", req.text.chars().count());

    // Stop whatever is playing before the new request starts
    state.voice.cancel();

    let voice = state.voice.clone();
    tokio::spawn(async move {
        if let Err(e) = voice.speak(&req.text).await {
            warn!("Speak failed: {e}");
        }
    });

    Json(SimpleResponse::ok("speaking"))
}

async fn handle_cancel(State(state): State<ApiState>) -> Json<SimpleResponse> {
    state.voice.cancel();
    Json(SimpleResponse::ok("cancelled"))
}

async fn handle_daily(
    State(state): State<ApiState>,
    Query(query): Query<DailyQuery>,
) -> Result<Json<DailyResponse>, Json<SimpleResponse>> {
    let date = match &query.date {
        Some(raw) => NaiveDate::parse_from_str(raw, DATE_KEY_FORMAT)
            .map_err(|e| Json(SimpleResponse::err(format!("invalid date '{raw}': {e}"))))?,
        None => Local::now().date_naive(),
    };

    let story = state
        .cycle
        .story_for(&STORY_SEGMENTS, date)
        .map_err(|e| Json(SimpleResponse::err(e.to_string())))?;
    let vocabulary = state
        .cycle
        .vocabulary_for(&VOCABULARY_PAIRS, date)
        .map_err(|e| Json(SimpleResponse::err(e.to_string())))?;
    let wordle = state
        .cycle
        .wordle_for(&WORDLE_WORDS, date)
        .map_err(|e| Json(SimpleResponse::err(e.to_string())))?;

    Ok(Json(DailyResponse {
        date: date.format(DATE_KEY_FORMAT).to_string(),
        story: *story,
        vocabulary: vocabulary.into_iter().copied().collect(),
        wordle: wordle.to_string(),
    }))
}
