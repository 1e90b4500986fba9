//! Analysis relay handler.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, info};

use super::super::AppState;

/// Relay a batch analysis request to the configured analyzer.
///
/// The inbound body is forwarded as-is with a JSON content type; the
/// analyzer's success body comes back unmodified. Failure mapping:
/// timeout to 504, unreachable to 503, analyzer error status to 500 with
/// the analyzer's status and body captured in `details`.
pub async fn analyze(State(state): State<AppState>, body: Bytes) -> Response {
    let endpoint = state.settings.analyze_endpoint();
    info!(
        "Forwarding analysis request ({} bytes) to {}",
        body.len(),
        endpoint
    );

    let result = state
        .http
        .post(&endpoint)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await;

    let resp = match result {
        Ok(resp) => resp,
        Err(e) if e.is_timeout() => {
            error!("Analyzer request timed out: {}", e);
            return (
                StatusCode::GATEWAY_TIMEOUT,
                Json(json!({
                    "error": "Request timeout - the analyzer took too long to respond"
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!("Analyzer unreachable: {}", e);
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "error": "Cannot connect to the analyzer. Please check if the API_URL environment variable is set correctly."
                })),
            )
                .into_response();
        }
    };

    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        error!("Analyzer responded with status {}: {}", status, text);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to analyze documents",
                "details": format!(
                    "Analyzer responded with status: {} - {}",
                    status.as_u16(),
                    text
                ),
            })),
        )
            .into_response();
    }

    match resp.bytes().await {
        Ok(payload) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            payload,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to read analyzer response: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to analyze documents",
                    "details": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
