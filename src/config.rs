//! Configuration Module
//!
//! Handles loading and managing service configuration from environment
//! variables. The completion API key is required; everything else has a
//! sensible default.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Service configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the completion provider (required)
    pub openai_api_key: String,
    /// Model name sent with every completion request
    pub model: String,
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of entries the response cache can hold
    pub cache_capacity: usize,
    /// Maximum age a cached report may be served at
    pub cache_ttl: Duration,
    /// Maximum length of each input text, in characters
    pub max_input_chars: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Loads `.env` first if present. Fails when `OPENAI_API_KEY` is
    /// missing; all other values fall back to defaults.
    ///
    /// # Environment Variables
    /// - `OPENAI_API_KEY` - completion provider key (required)
    /// - `OPENAI_MODEL` - model name (default: gpt-4o)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CACHE_CAPACITY` - maximum cached reports (default: 200)
    /// - `CACHE_TTL_SECS` - cached report lifetime in seconds (default: 3600)
    /// - `MAX_INPUT_CHARS` - per-field input limit (default: 8000)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Self {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(200),
            cache_ttl: Duration::from_secs(
                env::var("CACHE_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3600),
            ),
            max_input_chars: env::var("MAX_INPUT_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
