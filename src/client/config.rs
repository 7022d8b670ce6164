//! Client configuration.
//!
//! This module defines configuration options for the API client, covering
//! the backend base URL and request timeout.

use serde::{Deserialize, Serialize};

/// Default backend base URL (the notebook server's development address).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8888";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the notebook API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the notebook server, e.g. `http://localhost:8888`.
    ///
    /// Endpoint paths such as `/notebook/api/format` are joined onto this.
    pub base_url: String,

    /// Request timeout in seconds.
    ///
    /// Maximum time to wait for a complete response (including connection,
    /// headers, and body download). Defaults to 30 seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Creates a configuration pointing at the given base URL with the
    /// default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Sets the request timeout in seconds.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Returns the timeout as a `std::time::Duration`.
    pub fn timeout_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = ClientConfig::new("http://hue.example.com");
        assert_eq!(config.base_url, "http://hue.example.com");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_config_with_timeout() {
        let config = ClientConfig::new("http://localhost:8888").with_timeout(60);
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.timeout_duration(), std::time::Duration::from_secs(60));
    }

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_serialization() {
        let config = ClientConfig::new("http://localhost:8888").with_timeout(15);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ClientConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.base_url, config.base_url);
        assert_eq!(deserialized.timeout_secs, 15);
    }
}
