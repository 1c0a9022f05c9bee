//! The relevance ranking service.
//!
//! [`RelevanceRanker`] is the nucleus of the crate: it loads paper records
//! from a CSV, dispatches one chat call per record to an optional
//! [`ChatBackend`] (or runs the local fuzzy fallback when none is
//! configured), collects and stable-sorts the scores descending, persists
//! them as JSON, and returns a [`RelevanceResponse`].
//!
//! Dispatch is strictly sequential: no fan-out, no shared state between
//! invocations. Output files are overwritten last-writer-wins.

pub mod error;
pub mod output;
pub mod parse;
pub mod types;


pub use error::RankError;
pub use output::slugify;
pub use parse::parse_scores;
pub use types::{RelevanceResponse, RelevanceScore};

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::backend::{collect_reply, ChatBackend};
use crate::fuzzy::FuzzyScorer;
use crate::prompt::PromptBuilder;
use crate::records::{CsvLoader, PaperRecord};

/// Ranks papers from a CSV of summaries against a free-text query.
pub struct RelevanceRanker {
    backend: Option<Arc<dyn ChatBackend>>,
    loader: CsvLoader,
    prompt_builder: PromptBuilder,
    fuzzy_scorer: FuzzyScorer,
    output_directory: Option<PathBuf>,
}

impl std::fmt::Debug for RelevanceRanker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelevanceRanker")
            .field("backend_configured", &self.backend.is_some())
            .field("output_directory", &self.output_directory)
            .finish_non_exhaustive()
    }
}

impl Default for RelevanceRanker {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RelevanceRanker {
    /// Creates a ranker. With `None`, scoring falls back to
    /// [`FuzzyScorer`].
    pub fn new(backend: Option<Arc<dyn ChatBackend>>) -> Self {
        Self {
            backend,
            loader: CsvLoader::new(),
            prompt_builder: PromptBuilder::new(),
            fuzzy_scorer: FuzzyScorer::default(),
            output_directory: None,
        }
    }

    /// Sets the default directory for output files, used when `rank_papers`
    /// is called without an explicit one.
    pub fn with_output_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.output_directory = Some(directory.into());
        self
    }

    /// Replaces the prompt builder.
    pub fn with_prompt_builder(mut self, prompt_builder: PromptBuilder) -> Self {
        self.prompt_builder = prompt_builder;
        self
    }

    /// Replaces the fallback scorer.
    pub fn with_fuzzy_scorer(mut self, fuzzy_scorer: FuzzyScorer) -> Self {
        self.fuzzy_scorer = fuzzy_scorer;
        self
    }

    /// Runs a one-shot relevance analysis for `query` over `source_path`.
    ///
    /// Results are sorted descending by score (stable). They are written to
    /// `output_dir` if given, else the configured default directory, else the
    /// CSV's parent directory. When the CSV held zero records nothing is
    /// written and `output_path` is `None`.
    pub async fn rank_papers(
        &self,
        query: &str,
        source_path: &Path,
        output_dir: Option<&Path>,
    ) -> Result<RelevanceResponse, RankError> {
        if !source_path.exists() {
            return Err(RankError::CsvNotFound {
                path: source_path.to_path_buf(),
            });
        }

        let records = self.loader.load(source_path)?;
        if records.is_empty() {
            info!(path = %source_path.display(), "CSV held no records, nothing to rank");
            return Ok(RelevanceResponse {
                query: query.to_string(),
                results: Vec::new(),
                output_path: None,
            });
        }

        let mut scores = match &self.backend {
            Some(backend) => self.rank_with_backend(query, &records, backend.as_ref()).await?,
            None => {
                debug!("no backend configured, using local fallback scorer");
                self.fuzzy_scorer.score_records(query, &records)
            }
        };

        // Stable: ties keep their emission order.
        scores.sort_by(|a, b| {
            b.score()
                .partial_cmp(&a.score())
                .unwrap_or(Ordering::Equal)
        });

        let directory = output_dir
            .map(Path::to_path_buf)
            .or_else(|| self.output_directory.clone())
            .or_else(|| source_path.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        let output_path = output::write_scores(query, &scores, &directory)?;

        info!(
            results = scores.len(),
            output = %output_path.display(),
            "ranking complete"
        );

        Ok(RelevanceResponse {
            query: query.to_string(),
            results: scores,
            output_path: Some(output_path),
        })
    }

    /// One sequential chat call per record; all parsed scores accumulate.
    async fn rank_with_backend(
        &self,
        query: &str,
        records: &[PaperRecord],
        backend: &dyn ChatBackend,
    ) -> Result<Vec<RelevanceScore>, RankError> {
        let mut all_scores = Vec::new();
        for record in records {
            let exchange = self.prompt_builder.build(query, record)?;
            let fragments = backend.chat(&exchange).await?;
            let reply = collect_reply(&fragments);
            let scores = parse_scores(&reply);

            debug!(
                title = record.title(),
                scores = scores.len(),
                "scored record via backend"
            );
            all_scores.extend(scores);
        }
        Ok(all_scores)
    }
}
