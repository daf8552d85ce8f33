/// Validation utilities for user input

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

pub const WALLET_NAME_REQUIRED: &str = "Wallet name cannot be empty.";
pub const INVITE_CODE_REQUIRED: &str = "Wallet ID or invite code required.";
pub const NICKNAME_REQUIRED: &str = "Nickname cannot be empty.";

/// Validate a wallet name (checked after trimming)
pub fn validate_wallet_name(name: &str) -> ValidationResult {
    required(name, WALLET_NAME_REQUIRED)
}

/// Validate a wallet id or invite code
pub fn validate_invite_code(code: &str) -> ValidationResult {
    required(code, INVITE_CODE_REQUIRED)
}

/// Validate a card nickname
pub fn validate_nickname(nickname: &str) -> ValidationResult {
    required(nickname, NICKNAME_REQUIRED)
}

fn required(value: &str, message: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(message);
    }

    ValidationResult::ok()
}
