//! Mock chat backend for tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::chat::ChatExchange;

use super::error::BackendError;
use super::{ChatBackend, ChatFragment};

/// Backend that returns a predetermined payload and records every exchange
/// it receives.
#[derive(Debug, Clone, Default)]
pub struct StaticBackend {
    fragments: Vec<String>,
    fail: bool,
    exchanges: Arc<Mutex<Vec<ChatExchange>>>,
}

impl StaticBackend {
    /// Answers every call with `payload` as a single assistant fragment.
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            fragments: vec![payload.into()],
            ..Self::default()
        }
    }

    /// Answers every call with the given fragments, in order.
    pub fn streaming(fragments: Vec<String>) -> Self {
        Self {
            fragments,
            ..Self::default()
        }
    }

    /// Backend that fails every call with a transport-style error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Exchanges received so far, in call order.
    pub fn exchanges(&self) -> Vec<ChatExchange> {
        self.exchanges.lock().expect("lock poisoned").clone()
    }

    /// Number of chat calls received.
    pub fn call_count(&self) -> usize {
        self.exchanges.lock().expect("lock poisoned").len()
    }
}

#[async_trait]
impl ChatBackend for StaticBackend {
    async fn chat(&self, exchange: &ChatExchange) -> Result<Vec<ChatFragment>, BackendError> {
        self.exchanges
            .lock()
            .expect("lock poisoned")
            .push(exchange.clone());

        if self.fail {
            return Err(BackendError::UnexpectedStatus {
                provider: "mock",
                status: 500,
                body: "mock backend configured to fail".to_string(),
            });
        }

        Ok(self
            .fragments
            .iter()
            .map(|content| ChatFragment::assistant(content.clone()))
            .collect())
    }
}
