//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PAPERLENS_PROVIDER` named something other than `ollama` or `openai`.
    #[error("unknown provider '{value}': expected 'ollama' or 'openai'")]
    UnknownProvider { value: String },

    /// A provider is selected but no model identifier is configured.
    #[error("a model must be configured (PAPERLENS_MODEL) when a provider is selected")]
    MissingModel,

    /// Timeout value could not be parsed as seconds.
    #[error("failed to parse timeout '{value}': {source}")]
    TimeoutParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Output path exists but is not a directory.
    #[error("output path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Building the configured backend failed.
    #[error("failed to construct the configured backend: {0}")]
    Backend(#[from] crate::backend::BackendError),
}
