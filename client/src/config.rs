//! Client configuration from environment variables

use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{AppError, Result};

/// Default API base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Runtime configuration for the client and CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API base URL; paths are appended to it
    pub base_url: String,
    /// Per-request timeout; `None` keeps the HTTP stack default
    pub request_timeout: Option<Duration>,
    /// JSON file holding the persisted session
    pub session_file: PathBuf,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "wallet_client=debug,info")
    pub log_level: String,
    /// Mirror logs to stderr
    pub log_to_stderr: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
            session_file: PathBuf::from(".wallet-session.json"),
            log_dir: PathBuf::from("logs"),
            log_level: "wallet_client=info,warn".to_string(),
            log_to_stderr: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, reading `.env` first
    /// when present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = match lookup("BASE_URL") {
            Some(raw) => parse_base_url(&raw)?,
            None => defaults.base_url,
        };

        let request_timeout = match lookup("WALLET_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    AppError::Config(format!("WALLET_REQUEST_TIMEOUT_SECS is not a number: {}", raw))
                })?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            base_url,
            request_timeout,
            session_file: lookup("WALLET_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_file),
            log_dir: lookup("WALLET_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_to_stderr: lookup("WALLET_LOG_STDERR")
                .map(|v| v == "1")
                .unwrap_or(defaults.log_to_stderr),
        })
    }

    /// Same configuration pointed at another API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn parse_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed)
        .map_err(|e| AppError::Config(format!("BASE_URL is not a valid URL ({}): {}", e, raw)))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(AppError::Config(format!(
            "BASE_URL must use http or https, got {}",
            other
        ))),
    }
}
