//! Completion Provider Module
//!
//! Seam for the external LLM completion service. The rest of the crate
//! only sees an opaque async function from a prompt pair to reply text;
//! everything about transport, authentication, and retries lives behind
//! this trait.

pub mod openai;
pub mod prompt;

use async_trait::async_trait;
use thiserror::Error;

pub use openai::OpenAiProvider;

// == Provider Error ==
/// Failure modes of the external completion call.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (connect, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Retryable failures persisted through every attempt
    #[error("provider unavailable after {attempts} attempts")]
    ExhaustedRetries { attempts: u32 },

    /// The provider answered 200 but carried no usable text
    #[error("provider returned an empty reply")]
    EmptyReply,
}

// == Completion Provider ==
/// An opaque completion endpoint: prompt in, reply text out.
///
/// Implementations must be safe to share across request handlers.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends one completion request and returns the raw reply text.
    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError>;
}
