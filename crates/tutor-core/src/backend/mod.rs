//! Completion backend abstraction.
//!
//! The pipeline needs exactly one capability from a text-generation
//! backend: given a system instruction and a user instruction, return a
//! single text completion. Everything else (protocol, model, auth) stays
//! behind the [`CompletionBackend`] trait.

pub mod openai;
pub mod trait_def;

pub use openai::{OpenAiBackend, OpenAiConfig};
pub use trait_def::CompletionBackend;

use thiserror::Error;

/// Failure of one completion request. Never retried automatically; the
/// caller sees the failed operation immediately.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend cannot be constructed or is missing credentials.
    #[error("backend misconfigured: {0}")]
    Misconfiguration(String),

    /// The request failed in transit. Includes client-side timeouts.
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("completion backend returned {status}: {message}")]
    Http { status: u16, message: String },

    /// The backend answered, but with no usable completion text.
    #[error("completion backend returned an empty response")]
    EmptyResponse,
}
