//! Chat exchange validation errors.

use thiserror::Error;

/// Invariant violations raised while constructing chat messages or exchanges.
#[derive(Debug, Error, PartialEq)]
pub enum ChatError {
    /// Message content was empty or whitespace-only.
    #[error("message content must be a non-empty string")]
    EmptyContent,

    /// An exchange was constructed with no messages.
    #[error("a chat exchange requires at least one message")]
    EmptyMessages,

    /// Temperature outside the supported range.
    #[error("temperature must be between 0.0 and 2.0, got {value}")]
    InvalidTemperature { value: f64 },

    /// Non-positive max-token bound.
    #[error("max_tokens must be positive when provided, got {value}")]
    InvalidMaxTokens { value: i64 },
}
