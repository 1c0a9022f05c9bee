//! Deterministic local fallback scoring.
//!
//! When no chat backend is configured, records are scored by fuzzy text
//! similarity between the query and a per-record search blob (title plus all
//! non-null column values). Two strategies are available: a token-set-style
//! match that ignores word order and duplication, and a plain sequence
//! similarity as the unconditional baseline. Both are built on `strsim`'s
//! normalized Levenshtein similarity and produce ratios in `[0, 100]`.


use std::collections::BTreeSet;

use tracing::debug;

use crate::ranking::RelevanceScore;
use crate::records::PaperRecord;

/// Similarity algorithm used by the fallback scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimilarityStrategy {
    /// Token-set comparison: order- and duplication-insensitive.
    #[default]
    TokenSet,
    /// Whole-string sequence similarity.
    Sequence,
}

/// Scores records against a query without any model backend.
#[derive(Debug, Clone, Default)]
pub struct FuzzyScorer {
    strategy: SimilarityStrategy,
}

impl FuzzyScorer {
    pub fn new(strategy: SimilarityStrategy) -> Self {
        Self { strategy }
    }

    /// Scores every record against `query`.
    ///
    /// A blank query yields no results. Records whose search blob is empty or
    /// whose ratio is zero are skipped. Scores are `ratio / 100`, rounded to
    /// four decimal places.
    pub fn score_records(&self, query: &str, records: &[PaperRecord]) -> Vec<RelevanceScore> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        for record in records {
            let mut fragments = vec![record.title()];
            fragments.extend(
                record
                    .columns()
                    .iter()
                    .filter_map(|(_, value)| value.as_deref()),
            );
            let blob = fragments.join(" ").trim().to_string();
            if blob.is_empty() {
                continue;
            }

            let ratio = match self.strategy {
                SimilarityStrategy::TokenSet => token_set_ratio(query, &blob),
                SimilarityStrategy::Sequence => sequence_ratio(query, &blob),
            };
            if ratio <= 0.0 {
                continue;
            }

            let score = (ratio / 100.0).clamp(0.0, 1.0);
            let score = (score * 10_000.0).round() / 10_000.0;
            if let Ok(result) = RelevanceScore::new(record.title(), score) {
                results.push(result);
            }
        }

        debug!(
            strategy = ?self.strategy,
            records = records.len(),
            scored = results.len(),
            "local fallback scoring complete"
        );

        results
    }
}

/// Whole-string similarity ratio in `[0, 100]`.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase()) * 100.0
}

/// Token-set similarity ratio in `[0, 100]`.
///
/// Tokenizes both sides into lowercase alphanumeric word sets and compares
/// the shared-token string against each side's combined string, taking the
/// best of the three pairings. Two strings with the same word set score 100
/// regardless of order or repetition.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let shared: Vec<&str> = tokens_a
        .intersection(&tokens_b)
        .map(String::as_str)
        .collect();
    let only_a: Vec<&str> = tokens_a
        .difference(&tokens_b)
        .map(String::as_str)
        .collect();
    let only_b: Vec<&str> = tokens_b
        .difference(&tokens_a)
        .map(String::as_str)
        .collect();

    // One side fully contained in the other is a perfect set match.
    if !shared.is_empty() && (only_a.is_empty() || only_b.is_empty()) {
        return 100.0;
    }

    let sect = shared.join(" ");
    let combined_a = join_with_base(&sect, &only_a);
    let combined_b = join_with_base(&sect, &only_b);

    let pairings = [
        strsim::normalized_levenshtein(&sect, &combined_a),
        strsim::normalized_levenshtein(&sect, &combined_b),
        strsim::normalized_levenshtein(&combined_a, &combined_b),
    ];

    pairings.into_iter().fold(0.0, f64::max) * 100.0
}

fn tokenize(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_with_base(base: &str, rest: &[&str]) -> String {
    if base.is_empty() {
        rest.join(" ")
    } else if rest.is_empty() {
        base.to_string()
    } else {
        format!("{base} {}", rest.join(" "))
    }
}
