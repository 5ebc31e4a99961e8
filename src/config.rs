//! Remote API configuration.
//!
//! The summary service runs next to the client on `localhost:8000` by default.
//! Native builds read overrides from the environment at startup, wasm builds
//! take them from the environment at compile time.

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const API_URL_ENV: &str = "SESSION_NOTES_API_URL";
pub const TIMEOUT_ENV: &str = "SESSION_NOTES_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Build the configuration from environment overrides, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_values(read_var(API_URL_ENV), read_var(TIMEOUT_ENV))
    }

    fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> Self {
        let base_url = base_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let request_timeout = timeout_secs
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        Self { base_url, request_timeout }
    }

    /// Join the base URL and an endpoint path with exactly one slash
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(target_arch = "wasm32")]
fn read_var(name: &str) -> Option<String> {
    let value = match name {
        API_URL_ENV => option_env!("SESSION_NOTES_API_URL"),
        TIMEOUT_ENV => option_env!("SESSION_NOTES_TIMEOUT_SECS"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        let config = ApiConfig::new("http://notes.local:9000/");
        assert_eq!(
            config.endpoint("/session_summary"),
            "http://notes.local:9000/session_summary"
        );
        assert_eq!(
            config.endpoint("user_session_summaries"),
            "http://notes.local:9000/user_session_summaries"
        );
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_values(
            Some(" http://10.0.0.5:8000 ".to_string()),
            Some("5".to_string()),
        );
        assert_eq!(config.base_url, "http://10.0.0.5:8000");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_overrides_fall_back() {
        let config = ApiConfig::from_values(Some("   ".to_string()), Some("zero".to_string()));
        assert_eq!(config, ApiConfig::default());

        let config = ApiConfig::from_values(None, Some("0".to_string()));
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }
}
