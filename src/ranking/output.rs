//! Deterministic output persistence.
//!
//! The output filename is derived from the query: lowercase, every run of
//! non-alphanumeric characters collapsed to a single hyphen, hyphens trimmed
//! from the ends, `.json` appended. The file holds a pretty-printed JSON
//! array of `[title, score]` pairs and unconditionally overwrites any
//! previous file at that path.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::RankError;
use super::types::RelevanceScore;

/// Filename stem used when the query slugifies to nothing.
pub const EMPTY_SLUG_STEM: &str = "query";

/// Derives a filesystem-safe slug from `text`.
///
/// Idempotent: slugifying a slug returns it unchanged.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        EMPTY_SLUG_STEM.to_string()
    } else {
        slug
    }
}

/// Writes `scores` as `[title, score]` pairs under `directory`, creating it
/// (and parents) if absent. Returns the path of the written file.
pub fn write_scores(
    query: &str,
    scores: &[RelevanceScore],
    directory: &Path,
) -> Result<PathBuf, RankError> {
    std::fs::create_dir_all(directory).map_err(|source| RankError::OutputIo {
        path: directory.to_path_buf(),
        source,
    })?;

    let path = directory.join(format!("{}.json", slugify(query)));

    let pairs: Vec<(&str, f64)> = scores
        .iter()
        .map(|score| (score.paper_title(), score.score()))
        .collect();
    let json = serde_json::to_string_pretty(&pairs).expect("pairs of strings and floats serialize");

    std::fs::write(&path, json).map_err(|source| RankError::OutputIo {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), count = scores.len(), "wrote ranking output");

    Ok(path)
}
