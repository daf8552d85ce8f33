//! # Application State
//!
//! Session and dashboard data shared by every view-model. Wrapped in
//! [`SharedState`]; take the lock only for short synchronous sections and
//! never hold a guard across `.await`.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::{
    Balances, Card, LoginResponse, SessionSnapshot, User, UserOverview, Wallet, WalletBootstrap,
};

use super::session_store::SessionStore;
use crate::core::service::AuthTokenSink;

/// Application state behind a lock, as handed to view-models.
pub type SharedState = Arc<RwLock<AppState>>;

pub struct AppState {
    pub current_user: Option<User>,
    pub auth_token: Option<String>,
    pub person_id: Option<String>,
    pub wallet: Option<Wallet>,
    pub cards: Vec<Card>,
    pub balances: Option<Balances>,
    pub overview: Option<UserOverview>,
    sessions: SessionStore,
    token_sink: Option<Arc<dyn AuthTokenSink>>,
}

impl AppState {
    pub fn new(sessions: SessionStore) -> Self {
        Self {
            current_user: None,
            auth_token: None,
            person_id: None,
            wallet: None,
            cards: Vec::new(),
            balances: None,
            overview: None,
            sessions,
            token_sink: None,
        }
    }

    /// Forward every token change to `sink` (normally the `ApiClient`).
    pub fn with_token_sink(mut self, sink: Arc<dyn AuthTokenSink>) -> Self {
        self.token_sink = Some(sink);
        self
    }

    pub fn into_shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    /// Load the persisted session, if any, and hand its token to the sink.
    pub fn restore(&mut self) -> bool {
        let Some(snapshot) = self.sessions.load() else {
            return false;
        };

        tracing::info!(user_id = %snapshot.user.id, "Session restored");
        self.current_user = Some(snapshot.user);
        self.person_id = snapshot.person_id;
        self.set_token(Some(snapshot.token));
        true
    }

    /// Use `token` for requests without applying a login.
    pub fn authorize(&mut self, token: &str) {
        self.set_token(Some(token.to_string()));
    }

    pub fn apply_login(&mut self, response: &LoginResponse) {
        self.persist(&response.to_snapshot());
        self.current_user = Some(response.user.clone());
        self.person_id = response.person_id.clone();
        self.set_token(Some(response.token.clone()));
        tracing::info!(user_id = %response.user.id, "Login applied");
    }

    pub fn apply_bootstrap(&mut self, bootstrap: WalletBootstrap) {
        self.wallet = Some(bootstrap.wallet);
        self.cards = bootstrap.cards;
        self.balances = Some(bootstrap.balances);
    }

    /// Store the overview and refresh the signed-in user from it.
    pub fn apply_overview(&mut self, overview: UserOverview) {
        if self.current_user.as_ref() != Some(&overview.user) {
            self.current_user = Some(overview.user.clone());
            if let Some(snapshot) = self.session_snapshot() {
                self.persist(&snapshot);
            }
        }
        self.overview = Some(overview);
    }

    pub fn apply_wallet_context(
        &mut self,
        wallet: Wallet,
        cards: Vec<Card>,
        balances: Option<Balances>,
    ) {
        self.wallet = Some(wallet);
        self.cards = cards;
        self.balances = balances;
    }

    /// Replace the matching card, or append it when it is new.
    pub fn update_card(&mut self, card: Card) {
        match self.cards.iter_mut().find(|existing| existing.same_card(&card)) {
            Some(existing) => *existing = card,
            None => self.cards.push(card),
        }
    }

    pub fn clear_wallet_data(&mut self) {
        self.wallet = None;
        self.cards.clear();
        self.balances = None;
    }

    pub fn sign_out(&mut self) {
        if let Err(e) = self.sessions.clear() {
            tracing::warn!(error = %e, "Failed to clear persisted session");
        }
        self.current_user = None;
        self.person_id = None;
        self.overview = None;
        self.clear_wallet_data();
        self.set_token(None);
        tracing::info!("Signed out");
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_user.is_some() && self.auth_token.is_some()
    }

    /// Current session in its persisted shape.
    pub fn session_snapshot(&self) -> Option<SessionSnapshot> {
        Some(SessionSnapshot {
            user: self.current_user.clone()?,
            token: self.auth_token.clone()?,
            person_id: self.person_id.clone(),
        })
    }

    fn set_token(&mut self, token: Option<String>) {
        if let Some(sink) = &self.token_sink {
            sink.set_auth_token(token.clone());
        }
        self.auth_token = token;
    }

    fn persist(&self, snapshot: &SessionSnapshot) {
        if let Err(e) = self.sessions.save(snapshot) {
            tracing::warn!(error = %e, "Failed to persist session");
        }
    }
}
