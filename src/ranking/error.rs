//! Ranking error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::backend::BackendError;
use crate::chat::ChatError;
use crate::records::RecordError;

/// Errors surfaced by [`RelevanceRanker`](super::RelevanceRanker).
///
/// Malformed backend *score payloads* never appear here: undecodable output
/// yields zero scores for that call and invalid entries are skipped, so one
/// bad paper cannot abort ranking of the rest.
#[derive(Debug, Error)]
pub enum RankError {
    /// The source CSV does not exist.
    #[error("CSV file not found: {path}")]
    CsvNotFound { path: PathBuf },

    /// CSV loading or schema validation failed.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Prompt construction produced an invalid exchange.
    #[error(transparent)]
    Chat(#[from] ChatError),

    /// A scoring backend failed. Never retried, never masked.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// A relevance score was constructed outside `[0.0, 1.0]` or with a
    /// blank title.
    #[error("invalid relevance score for '{paper_title}': {score}")]
    InvalidScore { paper_title: String, score: f64 },

    /// Writing the output file failed.
    #[error("failed to write ranking output to {path}: {source}")]
    OutputIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
