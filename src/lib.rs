//! Jobfit - resume to job description matching service
//!
//! Forwards a (resume, job description) pair to an LLM completion
//! provider and memoizes the parsed report in a bounded, time-expiring
//! in-memory cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;

pub use api::AppState;
pub use config::Config;
