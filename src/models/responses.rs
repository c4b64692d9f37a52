//! Response DTOs for the matching service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::models::report::AnalysisReport;

/// Response body for the analyze operation (POST /analyze)
///
/// The `cached` flag tells the caller whether the report was served from
/// the response cache or freshly computed.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    /// The multi-section analysis report
    pub content: AnalysisReport,
    /// True when served from cache, false when freshly computed
    pub cached: bool,
}

impl AnalyzeResponse {
    /// Creates a response for a cache hit.
    pub fn cached(content: AnalysisReport) -> Self {
        Self {
            content,
            cached: true,
        }
    }

    /// Creates a response for a freshly computed report.
    pub fn fresh(content: AnalysisReport) -> Self {
        Self {
            content,
            cached: false,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of capacity evictions
    pub evictions: u64,
    /// Number of lazy TTL expirations
    pub expirations: u64,
    /// Current number of live entries in the cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics.
    pub fn new(stats: &crate::cache::CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the cache clear operation (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// Number of entries dropped
    pub cleared: usize,
}

impl ClearResponse {
    /// Creates a new ClearResponse.
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cache cleared, {cleared} entries dropped"),
            cleared,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
