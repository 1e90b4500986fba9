//! Analyze command - submit documents and display the findings.

use std::path::{Path, PathBuf};
use std::time::Duration;

use console::style;

use crate::client::AnalysisClient;
use crate::models::{is_accepted_type, AnalysisResponse, PendingFile, SubmissionRequest};
use crate::services::{encode_files, write_csv};
use crate::session::SessionState;
use crate::utils::{format_size, truncate};

pub async fn cmd_analyze(
    paths: &[PathBuf],
    endpoint: &str,
    timeout_ms: u64,
    json: bool,
    output: Option<&Path>,
    limit: usize,
) -> anyhow::Result<()> {
    let mut pending = Vec::new();
    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        if !is_accepted_type(&name) {
            eprintln!(
                "{} Skipping '{}': unsupported file type (accepted: pdf, xlsx, docx, txt)",
                style("!").yellow(),
                name
            );
            continue;
        }
        pending.push(PendingFile::from_path(path)?);
    }

    let mut session = SessionState::default().with_files(pending);
    if !session.can_submit() {
        eprintln!("No supported files selected.");
        return Ok(());
    }

    // Progress to stderr; stdout carries only the rendered results.
    eprintln!(
        "{} Submitting {} files to {}",
        style("→").cyan(),
        session.files().len(),
        endpoint
    );
    for file in session.files() {
        eprintln!("    {} ({})", file.name(), format_size(file.size_bytes()));
    }

    session = session.begin_analysis();

    let encoded = match encode_files(session.files()) {
        Ok(encoded) => encoded,
        Err(e) => {
            let failed = session.failed(e.to_string());
            eprintln!(
                "{} {}",
                style("✗").red(),
                failed.error().unwrap_or_default()
            );
            return Err(e.into());
        }
    };

    let client = AnalysisClient::new(endpoint, Duration::from_millis(timeout_ms));
    let request = SubmissionRequest { files: encoded };

    session = match client.submit(&request).await {
        Ok(response) => session.completed(response),
        Err(e) => {
            let failed = session.failed(e.to_string());
            eprintln!(
                "{} {}",
                style("✗").red(),
                failed.error().unwrap_or_default()
            );
            return Err(e.into());
        }
    };

    if let Some(response) = session.results() {
        println!("{}", render_results(response, json, limit)?);

        if let Some(target) = output {
            let path = write_csv(response, target)?;
            eprintln!(
                "{} Exported {} results to {}",
                style("✓").green(),
                response.results.len(),
                path.display()
            );
        }
    }

    Ok(())
}

/// Render the analysis outcome for stdout.
///
/// With `json` set the output is exactly one pretty-printed JSON document,
/// with no styled chrome, so it can be piped straight into other tools.
fn render_results(response: &AnalysisResponse, json: bool, limit: usize) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(response)?);
    }

    let mut lines = vec![
        String::new(),
        format!("{} Analysis complete", style("✓").green()),
        format!("  {:<18} {}", "Total Matches:", response.total_matches),
        format!("  {:<18} {}", "Files Processed:", response.files_processed),
        format!("  {:<18} {}", "Keywords Found:", response.keywords_found),
        String::new(),
    ];

    if !response.results.is_empty() {
        render_table(&mut lines, response, limit);
    }

    Ok(lines.join("\n"))
}

fn render_table(lines: &mut Vec<String>, response: &AnalysisResponse, limit: usize) {
    lines.push(format!(
        "{:<24} {:<14} {:<18} {}",
        "File", "Keyword", "Source", "Sentence"
    ));
    lines.push("-".repeat(100));

    let shown = if limit == 0 {
        response.results.len()
    } else {
        limit.min(response.results.len())
    };

    for result in response.results.iter().take(shown) {
        lines.push(format!(
            "{:<24} {:<14} {:<18} {}",
            truncate(&result.file_path, 24),
            truncate(&result.keyword, 14),
            truncate(&result.source_name, 18),
            truncate(&result.exact_sentence, 50)
        ));
    }

    if shown < response.results.len() {
        lines.push(String::new());
        lines.push(format!(
            "Showing first {} results. Export to CSV for the complete set.",
            shown
        ));
    }
}
