//! # Shared Wallet Client - Library Root
//!
//! Client for a shared-wallet and card backend: sign in, load the wallet
//! dashboard, create or join wallets and manage cards. The binary
//! (`wallet-cli`) is a thin command-line front end over this crate.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              wallet-client (this crate)                │
//! ├────────────────────────────────────────────────────────┤
//! │  app::view_models  - Login, dashboard, card settings   │
//! │  app::state        - Session state + persistence       │
//! │  services::api     - Typed HTTP client + endpoints     │
//! │  core              - Errors, messages, service traits  │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP (JSON, bearer token)
//!          ▼
//! ┌─────────────────┐
//! │  Wallet API     │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: session state and view-models
//!   - `AppState` shared as `Arc<RwLock<AppState>>`, locked briefly
//!   - `SessionStore` persists the login as flat key-value pairs
//!   - View-models publish snapshots and guard against overlapping actions
//!
//! - **services**: external integrations
//!   - `api`: backend HTTP client (auth, user, wallet, card endpoints)
//!
//! - **core**: `ApiError`/`AppError`, display messages, service traits
//!
//! - **config**: environment-driven settings (`BASE_URL`, session file, logs)
//!
//! - **logging**: `tracing` subscriber with daily-rotated log files
//!
//! - **utils**: input validation
//!
//! ### Control Flow
//!
//! ```text
//! action → view-model → service trait → ApiClient → backend
//!                ▲                                      │
//!                └──── AppState ◄── domain types ◄── DTOs
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wallet_client::app::{AppState, AuthViewModel, MemoryStore, Services, SessionStore};
//! use wallet_client::config::AppConfig;
//! use wallet_client::services::api::ApiClient;
//!
//! # async fn run() -> wallet_client::Result<()> {
//! let config = AppConfig::from_env()?;
//! let client = Arc::new(ApiClient::new(&config)?);
//! let app = AppState::new(SessionStore::new(Arc::new(MemoryStore::new())))
//!     .with_token_sink(client.clone())
//!     .into_shared();
//!
//! let auth = AuthViewModel::new(app.clone(), Services::from_client(client));
//! auth.login_demo().await;
//! assert!(app.read().is_signed_in());
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p wallet-client
//! ```
//!
//! HTTP behaviour is tested against a local `axum` stub server; view-models
//! are tested with scripted service mocks.

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod services;
pub mod utils;

pub use app::{AppState, SharedState};
pub use crate::core::{ApiError, AppError, Result};
