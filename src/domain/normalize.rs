//! Response normalisation for model output
//!
//! Converts raw generated text into a typed task output. Text-producing tasks
//! pass through trimmed. Extraction runs a two-tier recovery: strict JSON
//! parsing after fence stripping, then a per-field scrape over the raw text.
//! Extraction never fails; unresolved fields carry the "unknown" marker.

use crate::domain::models::{ExtractionRecord, TaskOutput, TaskType};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Matches `"key": "value"` shaped text for the seven record keys, tolerant
/// of single or double quoting around either side.
static FIELD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"["'](?P<key>title|date|time|location|client|project|attendees)["']\s*:\s*(?:"(?P<dq>[^"]+)"|'(?P<sq>[^']+)')"#,
    )
    .expect("field pattern is a valid regex")
});

/// Normalise raw model text into the output shape for the given task.
pub fn normalize(task: TaskType, raw: &str) -> TaskOutput {
    match task {
        TaskType::Summarize | TaskType::Query => TaskOutput::Text(raw.trim().to_string()),
        TaskType::Extract => TaskOutput::Record(recover_record(raw)),
    }
}

/// Recover a fully-populated extraction record from raw model text.
///
/// Strict tier first: fence-stripped JSON object, string values kept
/// verbatim, anything else marked unknown. Fallback tier scrapes the first
/// `"key": "value"` occurrence per field from the unmodified text.
pub fn recover_record(raw: &str) -> ExtractionRecord {
    let cleaned = strip_code_fence(raw);

    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(cleaned) {
        let mut record = ExtractionRecord::unknown();
        for key in ExtractionRecord::FIELDS {
            if let Some(serde_json::Value::String(value)) = map.get(key) {
                record.set_field(key, value.clone());
            }
        }
        return record;
    }

    log::warn!("Extraction output was not valid JSON, scraping fields from raw text");
    scrape_fields(raw)
}

/// Strip a surrounding markdown code fence, with or without a language tag.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let after_open = match trimmed.strip_prefix("```") {
        Some(rest) => rest,
        None => return trimmed,
    };

    // Drop the language tag on the opening fence line, if any
    let body = match after_open.find('\n') {
        Some(newline) => &after_open[newline + 1..],
        None => after_open,
    };

    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Scrape the first occurrence of each field from free-form text.
fn scrape_fields(raw: &str) -> ExtractionRecord {
    let mut record = ExtractionRecord::unknown();
    let mut seen: HashSet<&str> = HashSet::new();

    for caps in FIELD_PATTERN.captures_iter(raw) {
        let key = match caps.name("key") {
            Some(m) => m.as_str(),
            None => continue,
        };
        if !seen.insert(key) {
            continue;
        }
        if let Some(value) = caps.name("dq").or_else(|| caps.name("sq")) {
            record.set_field(key, value.as_str().to_string());
        }
    }

    record
}
