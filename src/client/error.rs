//! API request error types.
//!
//! This module defines the errors that can occur while talking to the
//! notebook backend, including network failures, timeouts, and response
//! decoding issues.

use std::fmt;

/// Errors that can occur during a notebook API request.
#[derive(Debug)]
pub enum ApiError {
    /// Network error occurred during request execution.
    ///
    /// This includes connection failures, DNS resolution errors,
    /// and other network-level issues.
    Network(String),

    /// Request timed out before completion.
    Timeout,

    /// The base URL or endpoint path could not be parsed.
    InvalidUrl(String),

    /// The server answered with a non-success HTTP status code.
    Http(u16),

    /// The response body could not be decoded into the expected shape.
    Decode(String),

    /// The request was cancelled before it settled.
    ///
    /// Only produced by cancellable requests; no partial result is delivered.
    Cancelled,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Timeout => write!(f, "Request timed out"),
            ApiError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            ApiError::Http(status) => write!(f, "Server returned HTTP {}", status),
            ApiError::Decode(msg) => write!(f, "Failed to decode response: {}", msg),
            ApiError::Cancelled => write!(f, "Request cancelled"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Convert reqwest errors to ApiError.
///
/// Maps reqwest's error types to our variants for consistent error handling
/// throughout the crate.
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if let Some(status) = err.status() {
            ApiError::Http(status.as_u16())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::InvalidUrl(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Convert URL parsing errors to ApiError.
impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let network_err = ApiError::Network("Connection refused".to_string());
        assert_eq!(
            format!("{}", network_err),
            "Network error: Connection refused"
        );

        let timeout_err = ApiError::Timeout;
        assert_eq!(format!("{}", timeout_err), "Request timed out");

        let invalid_url_err = ApiError::InvalidUrl("not a url".to_string());
        assert_eq!(format!("{}", invalid_url_err), "Invalid URL: not a url");

        let http_err = ApiError::Http(503);
        assert_eq!(format!("{}", http_err), "Server returned HTTP 503");

        let cancelled_err = ApiError::Cancelled;
        assert_eq!(format!("{}", cancelled_err), "Request cancelled");
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: &dyn std::error::Error = &ApiError::Timeout;
        assert_eq!(format!("{}", err), "Request timed out");
    }

    #[test]
    fn test_from_url_parse_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err = ApiError::from(parse_err);
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }
}
