//! Environment-backed configuration.
//!
//! All settings have defaults or are optional. Override with `PAPERLENS_*`
//! environment variables. When no provider is configured the ranker runs the
//! local fallback scorer; selecting one requires a model identifier.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::backend::{ChatBackend, OllamaBackend, OpenAiBackend};
use crate::backend::ollama::{DEFAULT_OLLAMA_URL, DEFAULT_TIMEOUT_SECS};

/// Which chat provider to score with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Ollama,
    OpenAi,
}

/// Ranker configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `PAPERLENS_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Selected provider. `None` means local fallback scoring.
    pub provider: Option<Provider>,

    /// Model identifier, required when a provider is selected.
    pub model: Option<String>,

    /// Ollama endpoint URL. Default: `http://localhost:11434`.
    pub ollama_url: String,

    /// Ollama request timeout in seconds. Default: `120`.
    pub timeout_secs: u64,

    /// OpenAI API key override. Falls back to `OPENAI_API_KEY` at backend
    /// construction when unset.
    pub openai_api_key: Option<String>,

    /// Default directory for ranking output files.
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: None,
            model: None,
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            openai_api_key: None,
            output_dir: None,
        }
    }
}

impl Config {
    const ENV_PROVIDER: &'static str = "PAPERLENS_PROVIDER";
    const ENV_MODEL: &'static str = "PAPERLENS_MODEL";
    const ENV_OLLAMA_URL: &'static str = "PAPERLENS_OLLAMA_URL";
    const ENV_TIMEOUT_SECS: &'static str = "PAPERLENS_TIMEOUT_SECS";
    const ENV_OPENAI_API_KEY: &'static str = "PAPERLENS_OPENAI_API_KEY";
    const ENV_OUTPUT_DIR: &'static str = "PAPERLENS_OUTPUT_DIR";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let provider = match Self::read_env(Self::ENV_PROVIDER) {
            Some(value) => Some(Self::parse_provider(&value)?),
            None => None,
        };
        let timeout_secs = match Self::read_env(Self::ENV_TIMEOUT_SECS) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::TimeoutParseError { value, source })?,
            None => defaults.timeout_secs,
        };

        Ok(Self {
            provider,
            model: Self::read_env(Self::ENV_MODEL),
            ollama_url: Self::read_env(Self::ENV_OLLAMA_URL).unwrap_or(defaults.ollama_url),
            timeout_secs,
            openai_api_key: Self::read_env(Self::ENV_OPENAI_API_KEY),
            output_dir: Self::read_env(Self::ENV_OUTPUT_DIR).map(PathBuf::from),
        })
    }

    /// Validates basic invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.is_some() && self.model.as_deref().map_or(true, |m| m.trim().is_empty()) {
            return Err(ConfigError::MissingModel);
        }

        if let Some(ref path) = self.output_dir {
            if path.exists() && !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Builds the configured chat backend, or `None` when no provider is
    /// selected (local fallback scoring).
    pub fn backend(&self) -> Result<Option<Arc<dyn ChatBackend>>, ConfigError> {
        self.validate()?;

        let Some(provider) = self.provider else {
            return Ok(None);
        };
        // validate() guarantees a non-blank model at this point.
        let model = self.model.clone().ok_or(ConfigError::MissingModel)?;

        let backend: Arc<dyn ChatBackend> = match provider {
            Provider::Ollama => Arc::new(OllamaBackend::new(
                model,
                Some(self.ollama_url.clone()),
                Some(Duration::from_secs(self.timeout_secs)),
            )?),
            Provider::OpenAi => Arc::new(OpenAiBackend::new(model, self.openai_api_key.clone())?),
        };

        Ok(Some(backend))
    }

    fn parse_provider(value: &str) -> Result<Provider, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ollama" => Ok(Provider::Ollama),
            "openai" => Ok(Provider::OpenAi),
            _ => Err(ConfigError::UnknownProvider {
                value: value.to_string(),
            }),
        }
    }

    fn read_env(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }
}
