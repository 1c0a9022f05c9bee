//! Record loading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading paper records from a CSV file.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The CSV file does not exist.
    #[error("CSV file not found: {path}")]
    NotFound { path: PathBuf },

    /// The header row has no `title` column (case-insensitive).
    #[error("CSV file must include a 'title' column in the header")]
    MissingTitleColumn,

    /// A data row surfaced a blank title.
    #[error("paper record requires a non-blank title")]
    BlankTitle,

    /// The CSV parser rejected the file.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying file I/O failed.
    #[error("failed to read CSV file: {0}")]
    Io(#[from] std::io::Error),
}
