//! Tolerant parsing of backend score payloads.
//!
//! Partial success is the designed behavior here: a payload that does not
//! decode, or is not a JSON list, yields zero scores; individual entries that
//! fail title or score validation are skipped while the rest are kept.

use serde_json::Value;
use tracing::debug;

use super::types::RelevanceScore;

/// Extracts validated scores from raw backend reply text.
pub fn parse_scores(text: &str) -> Vec<RelevanceScore> {
    let parsed: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(error) => {
            debug!(%error, "backend reply was not valid JSON, yielding no scores");
            return Vec::new();
        }
    };

    let Value::Array(entries) = parsed else {
        debug!("backend reply was not a JSON list, yielding no scores");
        return Vec::new();
    };

    let mut results = Vec::new();
    for entry in entries {
        let Value::Object(entry) = entry else {
            continue;
        };

        // A blank or non-string `paper_title` counts as absent; `title` is
        // consulted before the entry is given up on.
        let title = entry
            .get("paper_title")
            .and_then(title_as_string)
            .or_else(|| entry.get("title").and_then(title_as_string));
        let score = entry.get("score").and_then(score_as_f64);

        let (Some(title), Some(score)) = (title, score) else {
            continue;
        };

        if let Ok(result) = RelevanceScore::new(title, score) {
            results.push(result);
        }
    }

    results
}

fn title_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn score_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
