//! # Core Abstractions
//!
//! Error types and service traits shared by every layer of the client.
//!
//! ## Modules
//!
//! - **[`error`]**: `ApiError`, `StoreError`, `AppError`, `Result<T>`
//! - **[`service`]**: service traits for dependency injection
//! - **[`messages`]**: turning errors into short display strings
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wallet_client::config::AppConfig;
//! use wallet_client::core::service::{AuthApi, WalletApi};
//! use wallet_client::services::api::ApiClient;
//!
//! let client = Arc::new(ApiClient::new(&AppConfig::default()).unwrap());
//!
//! // In production: the HTTP client implements every API trait
//! let auth: Arc<dyn AuthApi> = client.clone();
//! let wallets: Arc<dyn WalletApi> = client;
//!
//! // In tests: hand the view-models mock implementations instead
//! ```

pub mod error;
pub mod messages;
pub mod service;

pub use error::{ApiError, AppError, Result, StoreError};
pub use service::{AuthApi, AuthTokenSink, CardApi, IdTokenProvider, UserApi, WalletApi};
