//! Paperlens: relevance ranking for research-paper summaries.
//!
//! Given a free-text query and a CSV of paper metadata, paperlens decides
//! which papers are semantically relevant and persists a ranked result set.
//! Scoring goes through a pluggable chat backend ([`ChatBackend`]) with two
//! concrete implementations, a locally hosted Ollama server and the hosted
//! OpenAI API, and degrades to a deterministic fuzzy text matcher when no
//! backend is configured.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`RelevanceRanker`] - The ranking service ([`RelevanceRanker::rank_papers`])
//! - [`RelevanceScore`], [`RelevanceResponse`] - Validated results
//! - [`PaperRecord`], [`CsvLoader`] - CSV record loading
//! - [`Config`], [`ConfigError`] - Environment-backed configuration
//!
//! ## Backends & Prompts
//! - [`ChatBackend`], [`ChatFragment`] - The scoring capability
//! - [`OllamaBackend`], [`OpenAiBackend`] - Concrete backends
//! - [`ChatExchange`], [`ChatMessage`], [`ChatRole`] - The wire format
//! - [`PromptBuilder`] - Query + record → exchange rendering
//!
//! ## Fallback Scoring
//! - [`FuzzyScorer`], [`SimilarityStrategy`] - Backend-free scoring
//!
//! ## Test/Mock Support
//! [`StaticBackend`] is available behind `#[cfg(any(test, feature = "mock"))]`.
//!
//! # Example
//!
//! ```no_run
//! use paperlens::{Config, RelevanceRanker};
//! use std::path::Path;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let ranker = RelevanceRanker::new(config.backend()?);
//!
//! let response = ranker
//!     .rank_papers(
//!         "trust in autonomous vehicles",
//!         Path::new("papers.csv"),
//!         None,
//!     )
//!     .await?;
//!
//! for score in &response.results {
//!     println!("{}\t{}", score.score(), score.paper_title());
//! }
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod chat;
pub mod config;
pub mod fuzzy;
pub mod prompt;
pub mod ranking;
pub mod records;

pub use backend::{BackendError, ChatBackend, ChatFragment, OllamaBackend, OpenAiBackend, collect_reply};
#[cfg(any(test, feature = "mock"))]
pub use backend::StaticBackend;
pub use chat::{ChatError, ChatExchange, ChatMessage, ChatRole, DEFAULT_TEMPERATURE};
pub use config::{Config, ConfigError, Provider};
pub use fuzzy::{FuzzyScorer, SimilarityStrategy, sequence_ratio, token_set_ratio};
pub use prompt::{PromptBuilder, prettify_key};
pub use ranking::{
    RankError, RelevanceRanker, RelevanceResponse, RelevanceScore, parse_scores, slugify,
};
pub use records::{CsvLoader, PaperRecord, RecordError};
