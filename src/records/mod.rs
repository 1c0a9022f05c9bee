//! Paper metadata records and the CSV loader that produces them.
//!
//! A [`PaperRecord`] is one parsed row of the summary CSV: a required
//! non-blank title plus every other column in its original order. The
//! [`CsvLoader`] validates the header (a `title` column must exist,
//! case-insensitive) and skips rows where every field is blank.

pub mod error;


pub use error::RecordError;

use std::path::Path;

use tracing::debug;

/// One parsed row of the paper-summary CSV.
///
/// Immutable once constructed. Column order matches the CSV header and is
/// preserved for prompt rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRecord {
    title: String,
    columns: Vec<(String, Option<String>)>,
}

impl PaperRecord {
    /// Creates a record from a title and the remaining `(column, value)`
    /// pairs in CSV order.
    ///
    /// Fails with [`RecordError::BlankTitle`] when the title is empty after
    /// trimming.
    pub fn new(
        title: impl Into<String>,
        columns: Vec<(String, Option<String>)>,
    ) -> Result<Self, RecordError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(RecordError::BlankTitle);
        }
        Ok(Self { title, columns })
    }

    /// The paper title. Never blank.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Non-title columns in CSV order.
    pub fn columns(&self) -> &[(String, Option<String>)] {
        &self.columns
    }

    /// Looks up a column value by exact name.
    pub fn column(&self, name: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_deref())
    }
}

/// Loads structured paper records from CSV companion files.
#[derive(Debug, Clone, Default)]
pub struct CsvLoader;

impl CsvLoader {
    pub fn new() -> Self {
        Self
    }

    /// Loads paper records from `path`.
    ///
    /// The header must contain a `title` column (case-insensitive,
    /// whitespace-trimmed). Rows where every field is blank are skipped.
    /// Values keep their raw string form; blank cells become `None`.
    pub fn load(&self, path: &Path) -> Result<Vec<PaperRecord>, RecordError> {
        if !path.exists() {
            return Err(RecordError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let file = std::fs::File::open(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect();

        let title_idx = headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case("title"))
            .ok_or(RecordError::MissingTitleColumn)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            if row.iter().all(|field| field.trim().is_empty()) {
                continue;
            }

            let title = row.get(title_idx).unwrap_or_default();
            let columns = headers
                .iter()
                .enumerate()
                .filter(|(idx, _)| *idx != title_idx)
                .map(|(idx, name)| {
                    let value = row.get(idx).filter(|v| !v.trim().is_empty());
                    (name.clone(), value.map(str::to_string))
                })
                .collect();

            records.push(PaperRecord::new(title, columns)?);
        }

        debug!(path = %path.display(), count = records.len(), "loaded paper records");

        Ok(records)
    }
}
