//! Configuration for the analysis gateway.
//!
//! The analyzer base URL is resolved once at startup from a fixed priority
//! list of environment variables, never per request.

use std::time::Duration;

/// Environment variables consulted for the analyzer base URL, highest
/// priority first.
pub const ANALYZER_URL_VARS: [&str; 2] = ["API_URL", "PYTHON_API_URL"];

/// Analyzer base URL used when no environment override is set.
pub const DEFAULT_ANALYZER_URL: &str = "http://localhost:8000";

/// Path appended to the analyzer base URL for batch analysis.
pub const ANALYZE_PATH: &str = "/analyze";

/// Default analyzer request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the external analyzer service.
    pub analyzer_url: String,
    /// Analyzer request timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            analyzer_url: resolve_analyzer_url(),
            request_timeout_ms: resolve_timeout_ms(),
        }
    }
}

impl Settings {
    /// Full URL of the analyzer's batch endpoint.
    pub fn analyze_endpoint(&self) -> String {
        format!(
            "{}{}",
            self.analyzer_url.trim_end_matches('/'),
            ANALYZE_PATH
        )
    }

    /// Analyzer request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Resolve the analyzer base URL from the environment.
///
/// Walks [`ANALYZER_URL_VARS`] in order; the first non-empty value wins,
/// otherwise [`DEFAULT_ANALYZER_URL`].
pub fn resolve_analyzer_url() -> String {
    resolve_analyzer_url_from(|var| std::env::var(var).ok())
}

fn resolve_analyzer_url_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    for var in ANALYZER_URL_VARS {
        if let Some(url) = lookup(var).filter(|s| !s.is_empty()) {
            tracing::debug!("Using analyzer URL from {}: {}", var, url);
            return url;
        }
    }
    DEFAULT_ANALYZER_URL.to_string()
}

fn resolve_timeout_ms() -> u64 {
    std::env::var("COMPLYSCAN_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve_with(vars: &[(&str, &str)]) -> String {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        resolve_analyzer_url_from(|var| map.get(var).cloned())
    }

    #[test]
    fn test_default_when_nothing_set() {
        assert_eq!(resolve_with(&[]), DEFAULT_ANALYZER_URL);
    }

    #[test]
    fn test_api_url_takes_priority() {
        let url = resolve_with(&[
            ("API_URL", "http://primary:8000"),
            ("PYTHON_API_URL", "http://legacy:8000"),
        ]);
        assert_eq!(url, "http://primary:8000");
    }

    #[test]
    fn test_fallback_variable_used_when_primary_absent() {
        let url = resolve_with(&[("PYTHON_API_URL", "http://legacy:8000")]);
        assert_eq!(url, "http://legacy:8000");
    }

    #[test]
    fn test_empty_value_is_skipped() {
        let url = resolve_with(&[("API_URL", ""), ("PYTHON_API_URL", "http://legacy:8000")]);
        assert_eq!(url, "http://legacy:8000");
    }

    #[test]
    fn test_analyze_endpoint_join() {
        let settings = Settings {
            analyzer_url: "http://analyzer:8000".to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        };
        assert_eq!(settings.analyze_endpoint(), "http://analyzer:8000/analyze");

        let trailing = Settings {
            analyzer_url: "http://analyzer:8000/".to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        };
        assert_eq!(trailing.analyze_endpoint(), "http://analyzer:8000/analyze");
    }
}
