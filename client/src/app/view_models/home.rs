//! # Wallet Dashboard
//!
//! Loads the dashboard, switches between wallets and runs the wallet and
//! card actions. Failed fetches go through a fixed recovery policy:
//!
//! - `401`/`403`: sign out, ask the user to sign in again
//! - stale user reference in the error body: one demo re-login, then one
//!   retry of the same fetch with no further recovery
//! - anything else: the server's message

use parking_lot::RwLock;
use shared::{
    format_currency, Balances, Card, User, UserOverview, Wallet, WalletSummary, MISSING_AMOUNT,
};

use super::{Cancellation, InFlight, Services};
use crate::app::screen_state::ScreenState;
use crate::app::state::SharedState;
use crate::core::error::ApiError;
use crate::core::messages::{error_message, is_kyc_required, is_stale_user};
use crate::utils::validation::{validate_invite_code, validate_wallet_name};

pub const LOADING_WALLET: &str = "Loading your wallet...";
pub const NOT_LOGGED_IN: &str = "Not logged in.";
pub const SESSION_EXPIRED: &str = "Session expired. Please sign in again.";
pub const SESSION_RESET: &str = "Session reset. Please try signing in again.";
pub const KYC_BEFORE_WALLET: &str = "Complete KYC before creating a wallet.";
pub const KYC_BEFORE_CONTINUING: &str = "Complete KYC before continuing.";
pub const SELECT_WALLET_FIRST: &str = "Select a wallet before creating a card.";
pub const CARD_CREATED: &str = "Card created.";

/// Which fetch a load runs; a recovery retry repeats the same one.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadTarget {
    /// Server-side bootstrap of the default wallet
    Bootstrap,
    /// Overview, then details and cards of the resolved wallet
    Overview { focus: Option<String> },
}

/// One line of the members table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRow {
    pub name: String,
    pub role: String,
    pub status: String,
    pub amount: String,
}

/// Published fields of the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeSnapshot {
    pub current_user: Option<User>,
    pub wallet: Option<Wallet>,
    pub balances: Option<Balances>,
    pub cards: Vec<Card>,
    pub overview: Option<UserOverview>,
    pub wallets: Vec<WalletSummary>,
    pub selected_wallet_id: Option<String>,
    pub show_onboarding: bool,
    pub state: ScreenState,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
}

impl HomeSnapshot {
    pub fn pool_balance_text(&self) -> String {
        format_currency(self.balances.as_ref().and_then(|b| b.pool_display))
    }

    /// The signed-in user's equity, else the first entry.
    pub fn member_equity_text(&self) -> String {
        let Some(entries) = self.balances.as_ref().and_then(|b| b.member_equity.as_ref()) else {
            return MISSING_AMOUNT.to_string();
        };

        let own = self
            .current_user
            .as_ref()
            .and_then(|user| entries.iter().find(|entry| entry.user_id == user.id));

        match own.or_else(|| entries.first()) {
            Some(entry) => format_currency(Some(entry.balance)),
            None => MISSING_AMOUNT.to_string(),
        }
    }

    pub fn kyc_required(&self) -> bool {
        self.overview
            .as_ref()
            .map(|o| o.requirements.kyc_required)
            .unwrap_or(false)
    }

    pub fn selected_wallet_name(&self) -> Option<&str> {
        let selected = self.selected_wallet_id.as_deref()?;
        self.wallets
            .iter()
            .find(|w| w.id == selected)
            .and_then(|w| w.name.as_deref())
    }

    pub fn member_rows(&self) -> Vec<MemberRow> {
        let Some(wallet) = &self.wallet else {
            return Vec::new();
        };

        wallet
            .members()
            .iter()
            .map(|member| {
                let name = match (&member.user, &member.user_id) {
                    (Some(user), _) => user.display_name().to_string(),
                    (None, Some(user_id)) => user_id.clone(),
                    (None, None) => "Member".to_string(),
                };
                let status = match member.user.as_ref().and_then(|u| u.kyc_status) {
                    Some(kyc) if !kyc.is_verified() => "Pending KYC",
                    _ => "Active",
                };
                let amount = member
                    .user_id
                    .as_deref()
                    .and_then(|id| self.balances.as_ref()?.equity_for(id));

                MemberRow {
                    name,
                    role: member.role.clone().unwrap_or_else(|| "MEMBER".to_string()),
                    status: status.to_string(),
                    amount: format_currency(amount),
                }
            })
            .collect()
    }
}

pub struct HomeViewModel {
    app: SharedState,
    services: Services,
    published: RwLock<HomeSnapshot>,
    in_flight: InFlight,
    cancellation: Cancellation,
}

impl HomeViewModel {
    /// Starts from whatever the session already holds.
    pub fn new(app: SharedState, services: Services) -> Self {
        let published = {
            let state = app.read();
            let wallets = state
                .overview
                .as_ref()
                .map(|o| o.wallets.clone())
                .unwrap_or_default();
            let selected_wallet_id = state.wallet.as_ref().map(|w| w.id.clone()).or_else(|| {
                state
                    .overview
                    .as_ref()
                    .and_then(|o| o.first_wallet_id().map(str::to_string))
            });
            let show_onboarding = !state
                .overview
                .as_ref()
                .map(|o| o.has_wallets)
                .unwrap_or(state.wallet.is_some());

            HomeSnapshot {
                current_user: state.current_user.clone(),
                wallet: state.wallet.clone(),
                balances: state.balances.clone(),
                cards: state.cards.clone(),
                overview: state.overview.clone(),
                wallets,
                selected_wallet_id,
                show_onboarding,
                ..HomeSnapshot::default()
            }
        };

        Self {
            app,
            services,
            published: RwLock::new(published),
            in_flight: InFlight::default(),
            cancellation: Cancellation::default(),
        }
    }

    pub fn snapshot(&self) -> HomeSnapshot {
        let mut snapshot = self.published.read().clone();
        snapshot.is_loading = self.in_flight.is_active();
        snapshot
    }

    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    /// Bootstrap the dashboard for the signed-in user.
    pub async fn load(&self) {
        if self.app.read().auth_token.is_none() {
            let mut published = self.published.write();
            published.error_message = Some(NOT_LOGGED_IN.to_string());
            published.state = ScreenState::Error(NOT_LOGGED_IN.to_string());
            return;
        }

        let Some(_flight) = self.in_flight.try_begin() else {
            return;
        };
        self.run_load(LoadTarget::Bootstrap).await;
    }

    pub async fn refresh(&self) {
        self.load().await;
    }

    /// Reload the overview and the selected wallet without a bootstrap.
    pub async fn refresh_overview(&self) {
        if self.app.read().auth_token.is_none() {
            self.set_failed(NOT_LOGGED_IN.to_string());
            return;
        }

        let Some(_flight) = self.in_flight.try_begin() else {
            return;
        };
        self.run_load(LoadTarget::Overview { focus: None }).await;
    }

    /// Switch the dashboard to `wallet_id`. Selecting the current wallet does nothing.
    pub async fn select_wallet(&self, wallet_id: &str) {
        if self.published.read().selected_wallet_id.as_deref() == Some(wallet_id) {
            return;
        }

        let Some(_flight) = self.in_flight.try_begin() else {
            return;
        };
        self.published.write().selected_wallet_id = Some(wallet_id.to_string());
        self.run_load(LoadTarget::Overview {
            focus: Some(wallet_id.to_string()),
        })
        .await;
    }

    pub async fn create_wallet(&self, name: &str) {
        let validation = validate_wallet_name(name);
        if let Some(message) = validation.error {
            self.set_error(message);
            return;
        }
        if self.published.read().kyc_required() {
            self.set_error(KYC_BEFORE_WALLET.to_string());
            return;
        }

        let Some(_flight) = self.in_flight.try_begin() else {
            return;
        };
        self.begin_action("Creating wallet...");

        match self.services.wallets.create_wallet(name.trim()).await {
            Ok(wallet) => {
                tracing::info!(wallet_id = %wallet.id, "Wallet created");
                self.run_load(LoadTarget::Overview {
                    focus: Some(wallet.id),
                })
                .await;
                self.published.write().status_message = None;
            }
            Err(e) => self.action_failed(&e),
        }
    }

    /// Join by wallet id or invite code.
    pub async fn join_wallet(&self, wallet_id: &str) {
        let validation = validate_invite_code(wallet_id);
        if let Some(message) = validation.error {
            self.set_error(message);
            return;
        }

        let Some(_flight) = self.in_flight.try_begin() else {
            return;
        };
        self.begin_action("Joining wallet...");

        match self.services.wallets.join_wallet(wallet_id.trim()).await {
            Ok(wallet) => {
                tracing::info!(wallet_id = %wallet.id, "Wallet joined");
                self.run_load(LoadTarget::Overview {
                    focus: Some(wallet.id),
                })
                .await;
                self.published.write().status_message = None;
            }
            Err(e) => self.action_failed(&e),
        }
    }

    /// Issue a card in the selected wallet.
    pub async fn create_card(&self, nickname: Option<&str>) {
        let wallet_id = {
            let published = self.published.read();
            published
                .selected_wallet_id
                .clone()
                .or_else(|| published.wallet.as_ref().map(|w| w.id.clone()))
        };
        let Some(wallet_id) = wallet_id else {
            self.set_error(SELECT_WALLET_FIRST.to_string());
            return;
        };

        let Some(_flight) = self.in_flight.try_begin() else {
            return;
        };
        self.begin_action("Issuing card...");

        let nickname = nickname.map(str::trim);
        match self.services.cards.create_card(&wallet_id, nickname).await {
            Ok(card) => {
                tracing::info!(card = %card.display_id(), %wallet_id, "Card created");
                self.published.write().status_message = Some("Refreshing cards...".to_string());
                self.run_load(LoadTarget::Overview {
                    focus: Some(wallet_id),
                })
                .await;
                self.published.write().status_message = Some(CARD_CREATED.to_string());
            }
            Err(e) => self.action_failed(&e),
        }
    }

    pub fn sign_out(&self) {
        self.app.write().sign_out();
        *self.published.write() = HomeSnapshot::default();
    }

    async fn run_load(&self, target: LoadTarget) {
        if self.cancellation.is_cancelled() {
            return;
        }

        {
            let mut published = self.published.write();
            published.error_message = None;
            published.state = ScreenState::loading(LOADING_WALLET);
        }

        match self.fetch_and_apply(&target).await {
            Ok(true) => self.published.write().state = ScreenState::Loaded,
            Ok(false) => self.abandon_load(),
            Err(_) if self.cancellation.is_cancelled() => self.abandon_load(),
            Err(e) => self.recover(e, &target).await,
        }
    }

    async fn recover(&self, error: ApiError, target: &LoadTarget) {
        if error.is_unauthorized() {
            tracing::warn!(status = ?error.status(), "Session rejected by server");
            self.app.write().sign_out();
            self.sync_from_app();
            self.set_failed(SESSION_EXPIRED.to_string());
            return;
        }

        if is_stale_user(&error) {
            self.retry_with_fresh_login(target).await;
            return;
        }

        tracing::warn!(error = %error, "Dashboard load failed");
        self.set_failed(error_message(&error));
    }

    /// Exactly one re-login and one retry; a second failure is terminal.
    async fn retry_with_fresh_login(&self, target: &LoadTarget) {
        tracing::warn!(?target, "Stale user reference, signing in again");
        self.app.write().sign_out();

        match self.relogin_and_fetch(target).await {
            Ok(false) => self.abandon_load(),
            Ok(true) => {
                tracing::info!("Session recovered");
                let mut published = self.published.write();
                published.error_message = None;
                published.state = ScreenState::Loaded;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Recovery retry failed");
                self.app.write().sign_out();
                self.sync_from_app();
                self.set_failed(SESSION_RESET.to_string());
            }
        }
    }

    async fn relogin_and_fetch(&self, target: &LoadTarget) -> Result<bool, ApiError> {
        let response = self.services.auth.login_demo().await?;
        self.app.write().apply_login(&response);
        self.fetch_and_apply(target).await
    }

    /// `Ok(false)` when the load was cancelled before anything was applied.
    async fn fetch_and_apply(&self, target: &LoadTarget) -> Result<bool, ApiError> {
        match target {
            LoadTarget::Bootstrap => {
                let bootstrap = self.services.wallets.bootstrap().await?;
                if self.cancellation.is_cancelled() {
                    return Ok(false);
                }

                let wallet_id = bootstrap.wallet.id.clone();
                self.app.write().apply_bootstrap(bootstrap);
                self.sync_from_app();

                let mut published = self.published.write();
                published.selected_wallet_id = Some(wallet_id);
                published.show_onboarding = false;
                Ok(true)
            }
            LoadTarget::Overview { focus } => self.load_overview(focus.as_deref()).await,
        }
    }

    async fn load_overview(&self, focus: Option<&str>) -> Result<bool, ApiError> {
        let overview = self.services.users.fetch_overview().await?;
        if self.cancellation.is_cancelled() {
            return Ok(false);
        }

        let current = self.published.read().selected_wallet_id.clone();
        let selected = resolve_selected_wallet(&overview, focus, current.as_deref());
        let has_wallets = overview.has_wallets;

        {
            let mut published = self.published.write();
            published.wallets = overview.wallets.clone();
            published.selected_wallet_id = selected.clone();
        }
        self.app.write().apply_overview(overview);

        let Some(wallet_id) = selected.filter(|_| has_wallets) else {
            self.app.write().clear_wallet_data();
            self.sync_from_app();
            let mut published = self.published.write();
            published.selected_wallet_id = None;
            published.show_onboarding = true;
            return Ok(true);
        };

        let details = self.services.wallets.fetch_wallet_details(&wallet_id).await?;
        let cards = self.services.cards.list_cards(&wallet_id).await?;
        if self.cancellation.is_cancelled() {
            return Ok(false);
        }

        self.app
            .write()
            .apply_wallet_context(details.wallet, cards, details.balances);
        self.sync_from_app();
        self.published.write().show_onboarding = false;
        Ok(true)
    }

    /// Copy session and wallet data from the shared state.
    fn sync_from_app(&self) {
        let app = self.app.read();
        let mut published = self.published.write();
        published.current_user = app.current_user.clone();
        published.wallet = app.wallet.clone();
        published.cards = app.cards.clone();
        published.balances = app.balances.clone();
        published.overview = app.overview.clone();
    }

    fn abandon_load(&self) {
        tracing::debug!("Dashboard load cancelled");
        let mut published = self.published.write();
        published.status_message = None;
        published.state = ScreenState::Idle;
    }

    fn begin_action(&self, status: &str) {
        let mut published = self.published.write();
        published.status_message = Some(status.to_string());
        published.error_message = None;
    }

    fn action_failed(&self, error: &ApiError) {
        let message = if is_kyc_required(error) {
            KYC_BEFORE_CONTINUING.to_string()
        } else {
            error_message(error)
        };
        tracing::warn!(error = %error, "Dashboard action failed");

        let mut published = self.published.write();
        published.status_message = None;
        published.error_message = Some(message);
    }

    fn set_error(&self, message: String) {
        self.published.write().error_message = Some(message);
    }

    fn set_failed(&self, message: String) {
        let mut published = self.published.write();
        published.state = ScreenState::Error(message.clone());
        published.error_message = Some(message);
    }
}

/// Focused wallet if listed, else the current selection if still listed, else the first.
fn resolve_selected_wallet(
    overview: &UserOverview,
    focus: Option<&str>,
    current: Option<&str>,
) -> Option<String> {
    focus
        .filter(|id| overview.contains_wallet(id))
        .or_else(|| current.filter(|id| overview.contains_wallet(id)))
        .or_else(|| overview.first_wallet_id())
        .map(str::to_string)
}
