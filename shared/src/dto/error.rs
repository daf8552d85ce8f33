//! # Error Envelope

use serde::{Deserialize, Serialize};

/// `{"error": "..."}` body some endpoints return on failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Parse a raw body, returning `None` unless it is a JSON object with a
    /// string `error` field.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_envelope() {
        assert_eq!(
            ErrorBody::parse(r#"{"error":"Wallet not found","code":404}"#).map(|b| b.error),
            Some("Wallet not found".to_string())
        );
        assert_eq!(ErrorBody::parse("plain text"), None);
        assert_eq!(ErrorBody::parse(r#"{"error":42}"#), None);
    }
}
