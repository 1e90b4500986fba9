//! End-to-End Workflow Tests
//!
//! Drives the full pipeline against an in-process analyzer: local documents
//! are encoded, submitted through a real gateway over TCP, and the
//! normalized findings are rendered to CSV.

use std::time::Duration;

use axum::routing::post;
use axum::{Json, Router};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};

use complyscan::client::{AnalysisClient, SubmissionError};
use complyscan::config::Settings;
use complyscan::models::{EncodedFile, PendingFile, SubmissionRequest};
use complyscan::server::{create_router, AppState};
use complyscan::services::{encode_files, to_csv};

/// Bind a router on an ephemeral port, returning its base URL.
async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });
    format!("http://{}", addr)
}

/// Analyzer double: decodes each submitted file and reports one finding per
/// file, embedding the decoded size so encoding fidelity is visible in the
/// results.
async fn mock_analyze(Json(payload): Json<Value>) -> Json<Value> {
    let files = payload["files"].as_array().cloned().unwrap_or_default();
    let results: Vec<Value> = files
        .iter()
        .map(|file| {
            let name = file["filename"].as_str().unwrap_or_default();
            let content = file["content"].as_str().unwrap_or_default();
            let decoded = STANDARD
                .decode(content)
                .expect("Submitted content was not valid base64");
            json!({
                "file_path": name,
                "source_type": "upload",
                "source_name": "Mock Analyzer",
                "location": format!("{} bytes", decoded.len()),
                "keyword": "retention",
                "exact_sentence": format!(
                    "The \"{}\" document, as submitted, covers retention.",
                    name
                ),
                "partner": name.split('.').next().unwrap_or_default(),
            })
        })
        .collect();

    Json(json!({
        "total_matches": results.len(),
        "files_processed": files.len(),
        "keywords_found": 1,
        "results": results,
    }))
}

#[tokio::test]
async fn test_submit_through_gateway_and_export() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("policy.pdf"), b"ab").expect("Failed to write file");
    std::fs::write(dir.path().join("empty.docx"), b"").expect("Failed to write file");

    let analyzer_url = spawn(Router::new().route("/analyze", post(mock_analyze))).await;
    let gateway_url = spawn(create_router(AppState::new(Settings {
        analyzer_url,
        request_timeout_ms: 5_000,
    })))
    .await;

    let pending = vec![
        PendingFile::from_path(&dir.path().join("policy.pdf")).expect("Failed to read metadata"),
        PendingFile::from_path(&dir.path().join("empty.docx")).expect("Failed to read metadata"),
    ];
    let encoded = encode_files(&pending).expect("Failed to encode files");
    assert_eq!(encoded[0].content, "YWI=");
    assert_eq!(encoded[1].content, "");

    let client = AnalysisClient::new(
        &format!("{}/api/analyze", gateway_url),
        Duration::from_millis(5_000),
    );
    let response = client
        .submit(&SubmissionRequest { files: encoded })
        .await
        .expect("Submission failed");

    assert_eq!(response.total_matches, 2);
    assert_eq!(response.files_processed, 2);
    assert_eq!(response.results.len(), 2);

    assert_eq!(response.results[0].file_path, "policy.pdf");
    assert_eq!(response.results[0].location, "2 bytes");
    assert_eq!(response.results[0].partner, "policy");
    assert_eq!(response.results[1].file_path, "empty.docx");
    assert_eq!(response.results[1].location, "0 bytes");

    let csv = to_csv(&response);
    let lines: Vec<&str> = csv.split('\n').collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "\"File Path\",\"Source Type\",\"Source Name\",\"Location\",\"Keyword\",\"Exact Sentence\",\"Partner\""
    );
    assert!(lines[1]
        .contains("\"The \"\"policy.pdf\"\" document, as submitted, covers retention.\""));
}

#[tokio::test]
async fn test_analyzer_outage_surfaces_through_client() {
    // Bind then drop to find a port nothing is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let dead = format!(
        "http://{}",
        listener.local_addr().expect("Failed to read local address")
    );
    drop(listener);

    let gateway_url = spawn(create_router(AppState::new(Settings {
        analyzer_url: dead,
        request_timeout_ms: 1_000,
    })))
    .await;

    let client = AnalysisClient::new(
        &format!("{}/api/analyze", gateway_url),
        Duration::from_millis(5_000),
    );
    let request = SubmissionRequest {
        files: vec![EncodedFile {
            filename: "a.pdf".to_string(),
            content: "YWI=".to_string(),
        }],
    };

    let err = client
        .submit(&request)
        .await
        .expect_err("Submission should fail");
    match err {
        SubmissionError::UpstreamStatus { status, body } => {
            assert_eq!(status, 503);
            assert!(body.contains("Cannot connect"));
        }
        other => panic!("Unexpected error: {}", other),
    }
}
