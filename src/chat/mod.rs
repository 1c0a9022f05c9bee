//! Chat exchange types: the wire format between the ranker and any backend.
//!
//! A [`ChatExchange`] is an ordered sequence of role-tagged messages plus the
//! generation parameters a backend may honor. Invariants are enforced at
//! construction time so downstream code never sees an empty exchange, a blank
//! message, or an out-of-range temperature.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ChatError;

use serde::{Deserialize, Serialize};

/// Default sampling temperature for ranking prompts.
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Who authored a message in an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    /// Wire name for the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single message in a conversational exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    /// Creates a message, rejecting blank content.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Result<Self, ChatError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ChatError::EmptyContent);
        }
        Ok(Self { role, content })
    }

    /// Convenience constructor for a system message.
    pub fn system(content: impl Into<String>) -> Result<Self, ChatError> {
        Self::new(ChatRole::System, content)
    }

    /// Convenience constructor for a user message.
    pub fn user(content: impl Into<String>) -> Result<Self, ChatError> {
        Self::new(ChatRole::User, content)
    }

    /// Convenience constructor for an assistant message.
    pub fn assistant(content: impl Into<String>) -> Result<Self, ChatError> {
        Self::new(ChatRole::Assistant, content)
    }
}

/// A chat prompt plus runtime generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatExchange {
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: Option<u32>,
}

impl ChatExchange {
    /// Creates an exchange with the default temperature and no token bound.
    pub fn new(messages: Vec<ChatMessage>) -> Result<Self, ChatError> {
        Self::with_params(messages, DEFAULT_TEMPERATURE, None)
    }

    /// Creates an exchange with explicit generation parameters.
    pub fn with_params(
        messages: Vec<ChatMessage>,
        temperature: f64,
        max_tokens: Option<u32>,
    ) -> Result<Self, ChatError> {
        if messages.is_empty() {
            return Err(ChatError::EmptyMessages);
        }
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ChatError::InvalidTemperature { value: temperature });
        }
        if let Some(bound) = max_tokens {
            if bound == 0 {
                return Err(ChatError::InvalidMaxTokens { value: 0 });
            }
        }
        Ok(Self {
            messages,
            temperature,
            max_tokens,
        })
    }

    /// Messages in conversation order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Sampling temperature, always in `[0.0, 2.0]`.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Optional positive completion-token bound.
    pub fn max_tokens(&self) -> Option<u32> {
        self.max_tokens
    }
}
