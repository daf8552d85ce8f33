//! # Login Screen
//!
//! Demo and Google sign-in. A successful login authorizes the HTTP client,
//! bootstraps the default wallet and only then applies the session, so a
//! half-finished login never leaves a signed-in user behind.

use std::future::Future;

use parking_lot::RwLock;
use shared::LoginResponse;

use super::{Cancellation, InFlight, Services};
use crate::app::screen_state::ScreenState;
use crate::app::state::SharedState;
use crate::core::error::ApiError;
use crate::core::messages::error_message;
use crate::core::service::IdTokenProvider;

pub const SIGNING_IN: &str = "Signing you in...";
pub const PREPARING_WALLET: &str = "Preparing your wallet...";
pub const CONNECTING_GOOGLE: &str = "Connecting to Google...";

/// Published fields of the login screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthSnapshot {
    pub state: ScreenState,
    pub is_loading: bool,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
}

pub struct AuthViewModel {
    app: SharedState,
    services: Services,
    published: RwLock<AuthSnapshot>,
    in_flight: InFlight,
    cancellation: Cancellation,
}

impl AuthViewModel {
    pub fn new(app: SharedState, services: Services) -> Self {
        Self {
            app,
            services,
            published: RwLock::new(AuthSnapshot::default()),
            in_flight: InFlight::default(),
            cancellation: Cancellation::default(),
        }
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        let mut snapshot = self.published.read().clone();
        snapshot.is_loading = self.in_flight.is_active();
        snapshot
    }

    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    /// Sign in as the demo account.
    pub async fn login_demo(&self) {
        let Some(_flight) = self.in_flight.try_begin() else {
            tracing::debug!("Login already in progress");
            return;
        };

        self.begin(SIGNING_IN);
        let auth = self.services.auth.clone();
        self.complete_login(auth.login_demo()).await;
    }

    /// Sign in with a Google ID token obtained from `provider`.
    pub async fn sign_in_with_google(&self, provider: &dyn IdTokenProvider) {
        let Some(_flight) = self.in_flight.try_begin() else {
            tracing::debug!("Login already in progress");
            return;
        };

        self.begin(CONNECTING_GOOGLE);
        let id_token = match provider.sign_in().await {
            Ok(token) => token,
            Err(message) => {
                tracing::warn!(%message, "Google sign-in did not complete");
                self.fail(message);
                return;
            }
        };

        let auth = self.services.auth.clone();
        self.complete_login(auth.login_with_google(id_token)).await;
    }

    async fn complete_login<F>(&self, login: F)
    where
        F: Future<Output = Result<LoginResponse, ApiError>>,
    {
        let response = match login.await {
            Ok(response) => response,
            Err(e) => {
                self.fail(error_message(&e));
                return;
            }
        };
        if self.cancellation.is_cancelled() {
            self.abandon(false);
            return;
        }

        self.app.write().authorize(&response.token);
        self.set_status(PREPARING_WALLET);

        let bootstrap = match self.services.wallets.bootstrap().await {
            Ok(bootstrap) => bootstrap,
            Err(_) if self.cancellation.is_cancelled() => {
                self.abandon(true);
                return;
            }
            Err(e) => {
                self.fail(error_message(&e));
                return;
            }
        };
        if self.cancellation.is_cancelled() {
            self.abandon(true);
            return;
        }

        {
            let mut app = self.app.write();
            app.apply_login(&response);
            app.apply_bootstrap(bootstrap);
        }

        tracing::info!(user_id = %response.user.id, "Login complete");
        let mut published = self.published.write();
        published.state = ScreenState::Loaded;
        published.status_message = None;
        published.error_message = None;
    }

    fn begin(&self, status: &str) {
        let mut published = self.published.write();
        published.error_message = None;
        published.status_message = Some(status.to_string());
        published.state = ScreenState::loading(status);
    }

    fn set_status(&self, status: &str) {
        let mut published = self.published.write();
        published.status_message = Some(status.to_string());
        published.state = ScreenState::loading(status);
    }

    /// Drop a cancelled login. Once `authorized`, the new token is taken back too.
    fn abandon(&self, authorized: bool) {
        tracing::debug!(authorized, "Login cancelled");
        if authorized {
            self.app.write().sign_out();
        }

        let mut published = self.published.write();
        published.status_message = None;
        published.state = ScreenState::Idle;
    }

    /// Report `message` and drop any partial session so a retry starts clean.
    fn fail(&self, message: String) {
        {
            let mut app = self.app.write();
            if app.current_user.is_some() || app.auth_token.is_some() {
                app.sign_out();
            }
        }

        let mut published = self.published.write();
        published.status_message = None;
        published.state = ScreenState::Error(message.clone());
        if !self.cancellation.is_cancelled() {
            published.error_message = Some(message);
        }
    }
}
