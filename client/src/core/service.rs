//! # Service Traits
//!
//! Traits for dependency injection. View-models depend on these, never on
//! [`crate::services::api::ApiClient`] directly, so tests can swap in mocks.

use async_trait::async_trait;
use shared::{
    Card, CardDetails, CardStatus, LoginResponse, User, UserOverview, Wallet, WalletBootstrap,
    WalletDetails,
};

use super::error::ApiError;

/// Authentication endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange a Google ID token for a backend session.
    async fn login_with_google(&self, id_token: String) -> Result<LoginResponse, ApiError>;

    /// Sign in as the fixed demo account.
    async fn login_demo(&self) -> Result<LoginResponse, ApiError>;
}

/// Current-user endpoints.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Fetch the user behind `auth_token`, overriding any stored token.
    async fn fetch_current_user(&self, auth_token: &str) -> Result<User, ApiError>;

    async fn fetch_overview(&self) -> Result<UserOverview, ApiError>;
}

/// Wallet endpoints.
#[async_trait]
pub trait WalletApi: Send + Sync {
    /// Ensure a default wallet, membership and card exist; return dashboard data.
    async fn bootstrap(&self) -> Result<WalletBootstrap, ApiError>;

    async fn create_wallet(&self, name: &str) -> Result<Wallet, ApiError>;

    async fn join_wallet(&self, wallet_id: &str) -> Result<Wallet, ApiError>;

    async fn fetch_wallet_details(&self, wallet_id: &str) -> Result<WalletDetails, ApiError>;
}

/// Card endpoints.
#[async_trait]
pub trait CardApi: Send + Sync {
    async fn list_cards(&self, wallet_id: &str) -> Result<Vec<Card>, ApiError>;

    /// Issue a card. A blank nickname is not sent.
    async fn create_card(&self, wallet_id: &str, nickname: Option<&str>) -> Result<Card, ApiError>;

    async fn fetch_card(&self, card_id: &str) -> Result<CardDetails, ApiError>;

    async fn update_card_status(&self, card_id: &str, status: CardStatus) -> Result<Card, ApiError>;

    async fn update_nickname(&self, card_id: &str, nickname: &str) -> Result<Card, ApiError>;
}

/// Source of Google ID tokens.
///
/// The sign-in UI lives outside this crate; implementors hand back the opaque
/// token or a message describing why sign-in did not finish.
#[async_trait]
pub trait IdTokenProvider: Send + Sync {
    async fn sign_in(&self) -> Result<String, String>;
}

/// Receiver of bearer-token changes.
///
/// [`crate::app::AppState`] pushes every login and sign-out through this so
/// the HTTP client never sends a stale token.
pub trait AuthTokenSink: Send + Sync {
    fn set_auth_token(&self, token: Option<String>);
}
