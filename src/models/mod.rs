//! Request and Response models for the matching service API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies, plus the
//! typed analysis report the cache memoizes.

pub mod report;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use report::AnalysisReport;
pub use requests::AnalyzeRequest;
pub use responses::{
    AnalyzeResponse, ClearResponse, ErrorResponse, HealthResponse, StatsResponse,
};
