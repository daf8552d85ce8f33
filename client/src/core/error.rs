//! # Common Error Types
//!
//! Error handling for the wallet client.
//!
//! ## Error Categories
//!
//! - [`ApiError`]: everything that can go wrong talking to the backend
//!   (URL building, transport, non-2xx statuses, empty or undecodable bodies)
//! - [`StoreError`]: local key-value persistence failures
//! - [`AppError`]: application-wide wrapper used by the binary and config layer
//!
//! ## Usage Pattern
//!
//! ```rust
//! use wallet_client::core::error::ApiError;
//!
//! let err = ApiError::Server { status: 404, body: Some("{\"error\":\"Wallet not found\"}".into()) };
//! assert_eq!(err.status(), Some(404));
//! assert!(!err.is_unauthorized());
//! ```

use thiserror::Error;

/// Errors produced by [`crate::services::api::ApiClient`] and every service
/// built on top of it.
///
/// `Server` keeps the raw body text so callers can look for error signatures
/// (stale user, KYC required) and extract a display message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The base URL and path could not be combined into a valid URL.
    #[error("Invalid URL.")]
    InvalidUrl,

    /// The server answered with a status outside `200..300`.
    #[error("{}", server_error_text(.status, .body))]
    Server { status: u16, body: Option<String> },

    /// The body was present but did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decoding(#[source] serde_json::Error),

    /// A success status arrived with an empty body.
    #[error("No data returned from server.")]
    NoData,

    /// Connection refused, DNS failure, timeout, TLS, ...
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),
}

fn server_error_text(status: &u16, body: &Option<String>) -> String {
    match body.as_deref() {
        Some(body) if !body.is_empty() => format!("Server error {}: {}", status, body),
        _ => format!("Server error {}.", status),
    }
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Server { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    /// 401 or 403: the token is no longer accepted.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Case-insensitive substring match against the server error body.
    pub fn body_contains_any(&self, needles: &[&str]) -> bool {
        let Some(body) = self.body() else {
            return false;
        };
        let lowered = body.to_lowercase();
        needles
            .iter()
            .any(|needle| lowered.contains(&needle.to_lowercase()))
    }
}

/// Failures of the local session persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Session file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Local session storage error.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Invalid environment or configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let with_body = ApiError::Server { status: 500, body: Some("boom".into()) };
        let empty_body = ApiError::Server { status: 502, body: Some(String::new()) };
        let no_body = ApiError::Server { status: 404, body: None };

        assert_eq!(with_body.to_string(), "Server error 500: boom");
        assert_eq!(empty_body.to_string(), "Server error 502.");
        assert_eq!(no_body.to_string(), "Server error 404.");
    }

    #[test]
    fn test_simple_variants_display() {
        assert_eq!(ApiError::InvalidUrl.to_string(), "Invalid URL.");
        assert_eq!(ApiError::NoData.to_string(), "No data returned from server.");

        let decode = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(ApiError::Decoding(decode)
            .to_string()
            .starts_with("Failed to decode response: "));
    }

    #[test]
    fn test_unauthorized_statuses() {
        assert!(ApiError::Server { status: 401, body: None }.is_unauthorized());
        assert!(ApiError::Server { status: 403, body: None }.is_unauthorized());
        assert!(!ApiError::Server { status: 404, body: None }.is_unauthorized());
        assert!(!ApiError::NoData.is_unauthorized());
    }

    #[test]
    fn test_body_contains_any_is_case_insensitive() {
        let err = ApiError::Server {
            status: 500,
            body: Some(r#"{"error":"UserNotFound"}"#.into()),
        };

        assert!(err.body_contains_any(&["usernotfound", "user_not_found"]));
        assert!(!err.body_contains_any(&["kyc_required"]));
        assert!(!ApiError::InvalidUrl.body_contains_any(&["usernotfound"]));
    }

    #[test]
    fn test_app_error_wraps_api_error() {
        let err: AppError = ApiError::NoData.into();
        assert_eq!(err.to_string(), "API error: No data returned from server.");
    }
}
