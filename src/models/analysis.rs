//! Canonical analysis results and the normalizer for raw analyzer output.
//!
//! The analyzer's JSON is treated as untrusted: `normalize` never rejects a
//! payload. Missing or mistyped fields degrade to empty strings and zero
//! counts so one malformed row cannot sink an otherwise usable response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single keyword occurrence inside one source document.
///
/// All fields are opaque text produced by the analyzer; none are parsed
/// or interpreted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub file_path: String,
    /// Kind of source region the match was found in (page, worksheet, paragraph).
    #[serde(default)]
    pub source_type: String,
    #[serde(default)]
    pub source_name: String,
    /// Human-readable position, e.g. "Page 3" or "Row 17".
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub exact_sentence: String,
    /// Partner name derived from the filename by the analyzer.
    #[serde(default)]
    pub partner: String,
}

/// The full analyzer response in canonical shape.
///
/// The counts are analyzer-reported statistics and are carried as received,
/// never recomputed from `results`. A mismatch between `total_matches` and
/// `results.len()` is preserved, not corrected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub total_matches: i64,
    #[serde(default)]
    pub files_processed: i64,
    #[serde(default)]
    pub keywords_found: i64,
    #[serde(default)]
    pub results: Vec<AnalysisResult>,
}

/// Reshape raw analyzer JSON into the canonical response.
///
/// Total function: absent or non-array `results` becomes an empty list, and
/// every element of the array yields exactly one record. The analyzer emits
/// bare `{"error": ...}` objects into `results` for per-file failures; those
/// survive as all-empty records so row counts stay aligned with the raw
/// payload.
pub fn normalize(raw: &Value) -> AnalysisResponse {
    let results = raw
        .get("results")
        .and_then(Value::as_array)
        .map(|rows| rows.iter().map(normalize_row).collect())
        .unwrap_or_default();

    AnalysisResponse {
        total_matches: count_field(raw, "total_matches"),
        files_processed: count_field(raw, "files_processed"),
        keywords_found: count_field(raw, "keywords_found"),
        results,
    }
}

fn normalize_row(row: &Value) -> AnalysisResult {
    AnalysisResult {
        file_path: string_field(row, "file_path"),
        source_type: string_field(row, "source_type"),
        source_name: string_field(row, "source_name"),
        location: string_field(row, "location"),
        keyword: string_field(row, "keyword"),
        exact_sentence: string_field(row, "exact_sentence"),
        partner: string_field(row, "partner"),
    }
}

fn string_field(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn count_field(raw: &Value, key: &str) -> i64 {
    raw.get(key).and_then(Value::as_i64).unwrap_or(0)
}
