//! Pluggable chat backends for relevance scoring.
//!
//! A backend turns a [`ChatExchange`] into an ordered sequence of
//! [`ChatFragment`]s. A backend may answer in one fragment or many; callers
//! concatenate fragment contents in order to reconstruct the full reply text.
//! Two concrete backends are provided: [`OllamaBackend`] for a locally hosted
//! model server and [`OpenAiBackend`] for the hosted API. When no backend is
//! configured at all, the ranker falls back to
//! [`FuzzyScorer`](crate::fuzzy::FuzzyScorer) instead.

pub mod error;
pub mod ollama;
pub mod openai;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::BackendError;
#[cfg(any(test, feature = "mock"))]
pub use mock::StaticBackend;
pub use ollama::OllamaBackend;
pub use openai::OpenAiBackend;

use async_trait::async_trait;

use crate::chat::{ChatExchange, ChatRole};

/// One chunk of a backend's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatFragment {
    pub role: ChatRole,
    pub content: String,
}

impl ChatFragment {
    /// Creates an assistant-authored fragment.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Concatenates fragment contents, in order, into the full reply text.
pub fn collect_reply(fragments: &[ChatFragment]) -> String {
    fragments
        .iter()
        .map(|fragment| fragment.content.as_str())
        .collect()
}

/// Capability every scoring backend must provide.
///
/// Implementations must signal transport or auth failure through
/// [`BackendError`]; they are never retried by the caller.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Executes the chat completion workflow for one exchange.
    async fn chat(&self, exchange: &ChatExchange) -> Result<Vec<ChatFragment>, BackendError>;
}
