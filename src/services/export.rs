//! CSV export of analysis results.

use std::io;
use std::path::{Path, PathBuf};

use crate::models::AnalysisResponse;

/// Filename used for exported results.
pub const EXPORT_FILENAME: &str = "compliance-analysis-results.csv";

/// Column headers, in the fixed export order.
const CSV_HEADERS: [&str; 7] = [
    "File Path",
    "Source Type",
    "Source Name",
    "Location",
    "Keyword",
    "Exact Sentence",
    "Partner",
];

/// Serialize results to CSV.
///
/// One header row plus one row per result, in result order. Every cell is
/// double-quoted, with embedded quotes doubled. Rows are joined with a bare
/// newline and the output carries no trailing newline, so the line count is
/// always results + 1.
pub fn to_csv(response: &AnalysisResponse) -> String {
    let mut lines = Vec::with_capacity(response.results.len() + 1);
    lines.push(csv_row(CSV_HEADERS.iter().copied()));

    for result in &response.results {
        lines.push(csv_row(
            [
                result.file_path.as_str(),
                result.source_type.as_str(),
                result.source_name.as_str(),
                result.location.as_str(),
                result.keyword.as_str(),
                result.exact_sentence.as_str(),
                result.partner.as_str(),
            ]
            .into_iter(),
        ));
    }

    lines.join("\n")
}

fn csv_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    cells.map(quote_cell).collect::<Vec<_>>().join(",")
}

/// Quote a cell unconditionally, doubling any embedded quotes.
fn quote_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Write the CSV export to disk.
///
/// A directory target gets [`EXPORT_FILENAME`] inside it. Returns the path
/// actually written.
pub fn write_csv(response: &AnalysisResponse, target: &Path) -> io::Result<PathBuf> {
    let path = if target.is_dir() {
        target.join(EXPORT_FILENAME)
    } else {
        target.to_path_buf()
    };
    std::fs::write(&path, to_csv(response))?;
    Ok(path)
}
