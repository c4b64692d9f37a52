//! API Handlers
//!
//! HTTP request handlers for each matching-service endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{extract::State, Json};
use tracing::{debug, info};

use crate::cache::{fingerprint, ResponseCache};
use crate::error::{AppError, Result};
use crate::models::{
    AnalysisReport, AnalyzeRequest, AnalyzeResponse, ClearResponse, HealthResponse, StatsResponse,
};
use crate::provider::{prompt, CompletionProvider};

/// Application state shared across all handlers.
///
/// The cache sits behind an `Arc<RwLock<_>>`; handlers take the lock only
/// for the table lookup or write itself, never across the provider call.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe response cache
    pub cache: Arc<RwLock<ResponseCache<AnalysisReport>>>,
    /// The external completion service
    pub provider: Arc<dyn CompletionProvider>,
    /// Per-field input limit enforced before anything else runs
    pub max_input_chars: usize,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(
        cache: ResponseCache<AnalysisReport>,
        provider: Arc<dyn CompletionProvider>,
        max_input_chars: usize,
    ) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            provider,
            max_input_chars,
        }
    }

    /// Creates a new AppState from configuration and a provider.
    ///
    /// Fails when the configured cache capacity is invalid.
    pub fn from_config(
        config: &crate::config::Config,
        provider: Arc<dyn CompletionProvider>,
    ) -> Result<Self> {
        let cache = ResponseCache::new(config.cache_capacity, config.cache_ttl)?;
        Ok(Self::new(cache, provider, config.max_input_chars))
    }
}

/// Handler for POST /analyze
///
/// Validates the two texts, then runs the miss -> compute -> set sequence
/// against the response cache: a hit short-circuits the provider call
/// entirely, a miss invokes the provider, parses its reply, stores the
/// report and returns it tagged as freshly computed. A failed provider
/// call or an unparseable reply returns early and never writes to the
/// cache.
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate(state.max_input_chars) {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let key = fingerprint(&req.resume, &req.job_description);

    // Fast path: a memoized report. The write lock (needed because an
    // expired entry is removed on read) is dropped before any network
    // activity can happen.
    {
        let mut cache = state.cache.write().await;
        if let Some(report) = cache.get(&key) {
            debug!(key = %&key[..8], "serving analysis from cache");
            return Ok(Json(AnalyzeResponse::cached(report)));
        }
    }

    debug!(key = %&key[..8], "cache miss, calling completion provider");
    let user_prompt = prompt::build_user_prompt(&req.resume, &req.job_description);
    let reply = state
        .provider
        .complete(prompt::SYSTEM_PROMPT, &user_prompt)
        .await?;

    let report = AnalysisReport::from_reply(&reply)
        .map_err(|e| AppError::MalformedReply(e.to_string()))?;

    // Only a fully parsed report reaches the cache. Concurrent misses for
    // the same key each compute independently; the last write wins.
    state.cache.write().await.set(key, report.clone());

    Ok(Json(AnalyzeResponse::fresh(report)))
}

/// Handler for GET /stats
///
/// Returns current response-cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Read lock is enough for stats
    let cache = state.cache.read().await;
    Json(StatsResponse::new(&cache.stats()))
}

/// Handler for DELETE /cache
///
/// Drops every cached report.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut cache = state.cache.write().await;
    let cleared = cache.clear();
    info!("response cache cleared, {} entries dropped", cleared);
    Json(ClearResponse::new(cleared))
}

/// Handler for GET /health
///
/// Returns health status of the service.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
