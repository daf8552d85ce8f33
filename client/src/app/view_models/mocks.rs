//! Scripted service doubles and fixtures for view-model tests.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{
    Balances, Card, CardDetails, CardStatus, KycStatus, LoginResponse, MemberEquity, Requirements,
    User, UserOverview, Wallet, WalletBootstrap, WalletDetails, WalletMember, WalletSummary,
};

use super::Services;
use crate::app::session_store::SessionStore;
use crate::app::state::{AppState, SharedState};
use crate::app::store::MemoryStore;
use crate::core::error::ApiError;
use crate::core::service::{AuthApi, CardApi, IdTokenProvider, UserApi, WalletApi};

type Script<T> = Mutex<VecDeque<Result<T, ApiError>>>;

/// Every backend call answered from a per-endpoint queue.
///
/// An empty queue answers `ApiError::NoData`, so unexpected calls show up as
/// failures.
#[derive(Default)]
pub struct MockBackend {
    pub login_demo: Script<LoginResponse>,
    pub login_google: Script<LoginResponse>,
    pub overview: Script<UserOverview>,
    pub bootstrap: Script<WalletBootstrap>,
    pub create_wallet: Script<Wallet>,
    pub join_wallet: Script<Wallet>,
    pub wallet_details: Script<WalletDetails>,
    pub list_cards: Script<Vec<Card>>,
    pub create_card: Script<Card>,
    pub fetch_card: Script<CardDetails>,
    pub update_card: Script<Card>,
    bootstrap_delay: Mutex<Option<Duration>>,
    calls: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn services(self: &Arc<Self>) -> Services {
        Services {
            auth: self.clone(),
            users: self.clone(),
            wallets: self.clone(),
            cards: self.clone(),
        }
    }

    /// Hold every bootstrap answer back by `delay`.
    pub fn delay_bootstrap(&self, delay: Duration) {
        *self.bootstrap_delay.lock() = Some(delay);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.as_str() == name).count()
    }

    fn answer<T>(&self, name: &str, script: &Script<T>) -> Result<T, ApiError> {
        self.calls.lock().push(name.to_string());
        script.lock().pop_front().unwrap_or(Err(ApiError::NoData))
    }
}

pub fn push<T>(script: &Script<T>, result: Result<T, ApiError>) {
    script.lock().push_back(result);
}

#[async_trait]
impl AuthApi for MockBackend {
    async fn login_with_google(&self, _id_token: String) -> Result<LoginResponse, ApiError> {
        self.answer("login_with_google", &self.login_google)
    }

    async fn login_demo(&self) -> Result<LoginResponse, ApiError> {
        self.answer("login_demo", &self.login_demo)
    }
}

#[async_trait]
impl UserApi for MockBackend {
    async fn fetch_current_user(&self, _auth_token: &str) -> Result<User, ApiError> {
        self.calls.lock().push("fetch_current_user".to_string());
        Ok(user())
    }

    async fn fetch_overview(&self) -> Result<UserOverview, ApiError> {
        self.answer("fetch_overview", &self.overview)
    }
}

#[async_trait]
impl WalletApi for MockBackend {
    async fn bootstrap(&self) -> Result<WalletBootstrap, ApiError> {
        let delay = *self.bootstrap_delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.answer("bootstrap", &self.bootstrap)
    }

    async fn create_wallet(&self, _name: &str) -> Result<Wallet, ApiError> {
        self.answer("create_wallet", &self.create_wallet)
    }

    async fn join_wallet(&self, _wallet_id: &str) -> Result<Wallet, ApiError> {
        self.answer("join_wallet", &self.join_wallet)
    }

    async fn fetch_wallet_details(&self, _wallet_id: &str) -> Result<WalletDetails, ApiError> {
        self.answer("fetch_wallet_details", &self.wallet_details)
    }
}

#[async_trait]
impl CardApi for MockBackend {
    async fn list_cards(&self, _wallet_id: &str) -> Result<Vec<Card>, ApiError> {
        self.answer("list_cards", &self.list_cards)
    }

    async fn create_card(&self, _wallet_id: &str, _nickname: Option<&str>) -> Result<Card, ApiError> {
        self.answer("create_card", &self.create_card)
    }

    async fn fetch_card(&self, _card_id: &str) -> Result<CardDetails, ApiError> {
        self.answer("fetch_card", &self.fetch_card)
    }

    async fn update_card_status(&self, _card_id: &str, _status: CardStatus) -> Result<Card, ApiError> {
        self.answer("update_card_status", &self.update_card)
    }

    async fn update_nickname(&self, _card_id: &str, _nickname: &str) -> Result<Card, ApiError> {
        self.answer("update_nickname", &self.update_card)
    }
}

/// Google sign-in stand-in.
pub struct FixedIdToken(pub Result<String, String>);

#[async_trait]
impl IdTokenProvider for FixedIdToken {
    async fn sign_in(&self) -> Result<String, String> {
        self.0.clone()
    }
}

pub fn shared_state() -> SharedState {
    AppState::new(SessionStore::new(Arc::new(MemoryStore::new()))).into_shared()
}

/// State already signed in as [`user`] with token `jwt`.
pub fn signed_in_state() -> SharedState {
    let state = shared_state();
    state.write().apply_login(&login("jwt"));
    state
}

pub fn server(status: u16, body: &str) -> ApiError {
    ApiError::Server {
        status,
        body: Some(body.to_string()),
    }
}

pub fn user() -> User {
    User {
        id: "user-123".into(),
        email: "chris@example.com".into(),
        name: Some("Chris".into()),
        kyc_status: Some(KycStatus::Accepted),
    }
}

pub fn login(token: &str) -> LoginResponse {
    LoginResponse {
        user: user(),
        token: token.into(),
        person_id: None,
    }
}

pub fn wallet(id: &str) -> Wallet {
    Wallet {
        id: id.into(),
        name: Some(format!("Wallet {}", id)),
        members: Some(vec![WalletMember {
            user_id: Some("user-123".into()),
            role: Some("ADMIN".into()),
            user: Some(user()),
            ..WalletMember::default()
        }]),
        admin_id: Some("user-123".into()),
        created_at: None,
    }
}

pub fn card(id: &str, status: CardStatus) -> Card {
    Card {
        id: Some(id.into()),
        last4: Some("1234".into()),
        status: Some(status),
        ..Card::default()
    }
}

pub fn balances(pool: f64) -> Balances {
    Balances {
        pool_display: Some(pool),
        member_equity: Some(vec![MemberEquity {
            user_id: "user-123".into(),
            balance: 5.0,
        }]),
    }
}

pub fn bootstrap(wallet_id: &str) -> WalletBootstrap {
    WalletBootstrap {
        wallet: wallet(wallet_id),
        cards: vec![card("card-123", CardStatus::Active)],
        balances: balances(10.0),
    }
}

pub fn overview(wallet_ids: &[&str]) -> UserOverview {
    UserOverview {
        user: user(),
        has_wallets: !wallet_ids.is_empty(),
        requirements: Requirements::default(),
        wallets: wallet_ids
            .iter()
            .map(|id| WalletSummary {
                id: id.to_string(),
                name: Some(format!("Wallet {}", id)),
                role: None,
                is_admin: None,
                member_count: None,
                card_count: None,
                has_card_for_current_user: None,
                joined_at: None,
                created_at: None,
            })
            .collect(),
    }
}

pub fn details(wallet_id: &str, pool: f64) -> WalletDetails {
    WalletDetails {
        wallet: wallet(wallet_id),
        balances: Some(balances(pool)),
    }
}
