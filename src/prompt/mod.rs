//! Prompt construction for relevance scoring.
//!
//! Renders a [`PaperRecord`](crate::records::PaperRecord) into a compact text
//! block (title first, then preferred summary fields, then the rest in CSV
//! order) and wraps it with the query in a fixed two-message exchange that
//! demands a strict-JSON relevance verdict.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use crate::chat::{ChatError, ChatExchange, ChatMessage};
use crate::records::PaperRecord;

/// Default per-field character cap before truncation.
pub const DEFAULT_FIELD_CHAR_CAP: usize = 1200;

/// Default cap on the whole rendered paper block.
pub const DEFAULT_BLOCK_CHAR_CAP: usize = 6000;

/// Fields surfaced ahead of the remaining columns, in this order.
pub const DEFAULT_PREFERRED_FIELDS: [&str; 6] = [
    "abstract",
    "summary",
    "keywords",
    "methods",
    "results",
    "conclusion",
];

const SYSTEM_PROMPT: &str = "You are a meticulous research assistant. Evaluate SEMANTIC relevance to the query \
based on meaning (problem/task alignment, methods/approach, domain/data, evidence/results, recency). \
Do NOT rely on keyword overlap. Return STRICT JSON: a list with exactly one item having \
'paper_title' and 'score' (0..1). No explanations.";

/// Builds ranking prompts from a query and a paper record.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    preferred_fields: Vec<String>,
    field_char_cap: usize,
    block_char_cap: usize,
    renames: HashMap<String, String>,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self {
            preferred_fields: DEFAULT_PREFERRED_FIELDS
                .iter()
                .map(|f| f.to_string())
                .collect(),
            field_char_cap: DEFAULT_FIELD_CHAR_CAP,
            block_char_cap: DEFAULT_BLOCK_CHAR_CAP,
            renames: HashMap::new(),
        }
    }
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the preferred-field ordering.
    pub fn with_preferred_fields(mut self, fields: Vec<String>) -> Self {
        self.preferred_fields = fields;
        self
    }

    /// Overrides the per-field character cap.
    pub fn with_field_char_cap(mut self, cap: usize) -> Self {
        self.field_char_cap = cap;
        self
    }

    /// Overrides the whole-block character cap.
    pub fn with_block_char_cap(mut self, cap: usize) -> Self {
        self.block_char_cap = cap;
        self
    }

    /// Supplies an explicit label for a column, bypassing prettification.
    pub fn with_rename(mut self, column: impl Into<String>, label: impl Into<String>) -> Self {
        self.renames.insert(column.into(), label.into());
        self
    }

    /// Builds the fixed two-message ranking exchange for one record.
    pub fn build(&self, query: &str, record: &PaperRecord) -> Result<ChatExchange, ChatError> {
        let user_prompt = format!(
            "Query:\n{query}\n\nPaper text:\n{}\n\nReturn JSON ONLY, e.g.:\n\
             [{{\"paper_title\":\"Exact Title\",\"score\":0.82}}]",
            self.render_record(record)
        );

        ChatExchange::new(vec![
            ChatMessage::system(SYSTEM_PROMPT)?,
            ChatMessage::user(user_prompt)?,
        ])
    }

    /// Renders a record as labelled text: title first, then preferred fields
    /// present in the record, then remaining fields in CSV order.
    pub fn render_record(&self, record: &PaperRecord) -> String {
        let mut lines = Vec::new();
        lines.push(format!("Title: {}", record.title()));

        let mut rendered: Vec<&str> = Vec::new();
        for field in &self.preferred_fields {
            if let Some(value) = record.column(field) {
                lines.push(self.render_field(field, value));
                rendered.push(field.as_str());
            }
        }

        for (name, value) in record.columns() {
            if rendered.contains(&name.as_str()) {
                continue;
            }
            if let Some(value) = value.as_deref() {
                lines.push(self.render_field(name, value));
            }
        }

        truncate_chars(&lines.join("\n"), self.block_char_cap)
    }

    fn render_field(&self, name: &str, value: &str) -> String {
        let label = self
            .renames
            .get(name)
            .cloned()
            .unwrap_or_else(|| prettify_key(name));
        format!("{label}: {}", truncate_chars(value, self.field_char_cap))
    }
}

/// Converts a snake_case or camelCase column name to a "Title Case" label.
pub fn prettify_key(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    for chunk in key.split(|c: char| c == '_' || c == '-' || c.is_whitespace()) {
        if chunk.is_empty() {
            continue;
        }
        // Split camelCase chunks at lower-to-upper boundaries.
        let mut word = String::new();
        let mut prev_lower = false;
        for c in chunk.chars() {
            if c.is_uppercase() && prev_lower {
                words.push(std::mem::take(&mut word));
            }
            prev_lower = c.is_lowercase();
            word.push(c);
        }
        if !word.is_empty() {
            words.push(word);
        }
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let rest: String = chars.flat_map(char::to_lowercase).collect();
                    first.to_uppercase().collect::<String>() + &rest
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncates to `cap` characters, appending an ellipsis marker when cut.
fn truncate_chars(text: &str, cap: usize) -> String {
    if text.chars().count() <= cap {
        return text.to_string();
    }
    let mut out: String = text.chars().take(cap).collect();
    out.push_str("...");
    out
}
