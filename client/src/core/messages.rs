//! # Error Messages
//!
//! Short, user-facing strings for API failures.

use shared::ErrorBody;

use super::error::ApiError;

/// Body signatures meaning the token refers to a user the backend no longer has.
pub const STALE_USER_SIGNATURES: &[&str] = &["usernotfound", "user_not_found"];

/// Body signatures meaning the action needs a completed KYC check.
pub const KYC_REQUIRED_SIGNATURES: &[&str] = &["kycrequired", "kyc_required"];

/// Message to show for an API error.
///
/// Server errors prefer the JSON `error` field, then the raw body; everything
/// else uses the error's own description.
pub fn error_message(error: &ApiError) -> String {
    if let ApiError::Server { body, .. } = error {
        if let Some(parsed) = parsed_server_message(body.as_deref()) {
            return parsed;
        }
    }
    error.to_string()
}

/// Extract a display message from a raw error body.
///
/// Returns the `error` field of a JSON object when there is one, the raw body
/// when it is not JSON, and `None` for an empty or missing body.
pub fn parsed_server_message(body: Option<&str>) -> Option<String> {
    let body = body?;
    if body.is_empty() {
        return None;
    }

    match ErrorBody::parse(body) {
        Some(envelope) => Some(envelope.error),
        None => Some(body.to_string()),
    }
}

pub fn is_stale_user(error: &ApiError) -> bool {
    error.body_contains_any(STALE_USER_SIGNATURES)
}

pub fn is_kyc_required(error: &ApiError) -> bool {
    error.body_contains_any(KYC_REQUIRED_SIGNATURES)
}
