//! Result types for relevance ranking.

use std::path::PathBuf;

use serde::Serialize;

use super::error::RankError;

/// One paper's relevance verdict: a non-blank title and a score in
/// `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelevanceScore {
    paper_title: String,
    score: f64,
}

impl RelevanceScore {
    /// Creates a score, validating both invariants.
    pub fn new(paper_title: impl Into<String>, score: f64) -> Result<Self, RankError> {
        let paper_title = paper_title.into();
        if paper_title.trim().is_empty() || !(0.0..=1.0).contains(&score) {
            return Err(RankError::InvalidScore { paper_title, score });
        }
        Ok(Self { paper_title, score })
    }

    pub fn paper_title(&self) -> &str {
        &self.paper_title
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Terminal artifact of one ranking invocation.
///
/// `results` are sorted descending by score (stable: ties keep emission
/// order). `output_path` is `None` only when the input had zero records, in
/// which case no file was written.
#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceResponse {
    pub query: String,
    pub results: Vec<RelevanceScore>,
    pub output_path: Option<PathBuf>,
}

impl RelevanceResponse {
    /// Results as `[title, score]` rows, the persisted JSON shape.
    pub fn as_pairs(&self) -> Vec<(String, f64)> {
        self.results
            .iter()
            .map(|result| (result.paper_title.clone(), result.score))
            .collect()
    }
}
