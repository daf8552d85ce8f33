//! # Wallet CLI
//!
//! Entry point for the `wallet-cli` binary. Loads configuration, starts
//! logging, restores the saved session and runs one command through the
//! view-models.

mod cli;
mod output;

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use clap::Parser;
use shared::format_identifier;

use wallet_client::app::view_models::{CardSettingsSnapshot, HomeSnapshot};
use wallet_client::app::{
    AppState, AuthViewModel, CardSettingsViewModel, FileStore, HomeViewModel, ScreenState,
    Services, SessionStore, SharedState,
};
use wallet_client::config::AppConfig;
use wallet_client::core::messages::error_message;
use wallet_client::core::service::IdTokenProvider;
use wallet_client::logging;
use wallet_client::services::api::ApiClient;

use cli::{CardAction, Commands, WalletCli};

/// ID token handed over on the command line.
struct SuppliedIdToken(String);

#[async_trait]
impl IdTokenProvider for SuppliedIdToken {
    async fn sign_in(&self) -> Result<String, String> {
        let token = self.0.trim();
        if token.is_empty() {
            return Err("Google ID token is empty.".to_string());
        }
        Ok(token.to_string())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = WalletCli::parse();

    let mut config = AppConfig::from_env().context("failed to load configuration")?;
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    let _log_guard = logging::init(&config);

    let client = Arc::new(ApiClient::new(&config).context("failed to build HTTP client")?);
    let store = FileStore::open(&config.session_file).with_context(|| {
        format!(
            "failed to open session file {}",
            config.session_file.display()
        )
    })?;

    let mut state =
        AppState::new(SessionStore::new(Arc::new(store))).with_token_sink(client.clone());
    let restored = state.restore();
    tracing::debug!(restored, "Session restore attempted");

    let app = state.into_shared();
    let services = Services::from_client(client);

    match cli.command {
        Commands::LoginDemo => {
            let auth = AuthViewModel::new(app.clone(), services);
            auth.login_demo().await;
            finish_login(&app, auth.snapshot().error_message)
        }
        Commands::LoginGoogle { id_token } => {
            let auth = AuthViewModel::new(app.clone(), services);
            auth.sign_in_with_google(&SuppliedIdToken(id_token)).await;
            finish_login(&app, auth.snapshot().error_message)
        }
        Commands::Dashboard => {
            let home = HomeViewModel::new(app, services);
            home.load().await;
            report_home(&home.snapshot())
        }
        Commands::SelectWallet { wallet_id } => {
            let home = HomeViewModel::new(app, services);
            home.select_wallet(&wallet_id).await;
            report_home(&home.snapshot())
        }
        Commands::CreateWallet { name } => {
            let home = HomeViewModel::new(app, services);
            home.refresh_overview().await;
            if let ScreenState::Error(message) = home.snapshot().state {
                return Err(anyhow!(message));
            }
            home.create_wallet(&name).await;
            report_home(&home.snapshot())
        }
        Commands::JoinWallet { wallet_id } => {
            let home = HomeViewModel::new(app, services);
            home.join_wallet(&wallet_id).await;
            report_home(&home.snapshot())
        }
        Commands::CreateCard { nickname } => {
            let home = loaded_home(&app, &services).await?;
            home.create_card(nickname.as_deref()).await;
            report_home(&home.snapshot())
        }
        Commands::Card { action } => {
            loaded_home(&app, &services).await?;
            let settings = CardSettingsViewModel::new(app, services);
            match action {
                CardAction::Show => settings.load().await,
                CardAction::Lock => settings.set_locked(true).await,
                CardAction::Unlock => settings.set_locked(false).await,
                CardAction::Cancel => settings.set_deactivated(true).await,
                CardAction::Reactivate => settings.set_deactivated(false).await,
                CardAction::Nickname { nickname } => settings.update_nickname(&nickname).await,
            }
            report_card(&settings.snapshot())
        }
        Commands::Whoami => whoami(&app, &services).await,
        Commands::SignOut => {
            app.write().sign_out();
            println!("Signed out.");
            Ok(())
        }
    }
}

/// Dashboard loaded through the bootstrap, so a wallet and its cards exist.
async fn loaded_home(app: &SharedState, services: &Services) -> Result<HomeViewModel> {
    let home = HomeViewModel::new(app.clone(), services.clone());
    home.load().await;

    let snapshot = home.snapshot();
    match snapshot.state {
        ScreenState::Error(message) => Err(anyhow!(message)),
        _ => Ok(home),
    }
}

fn finish_login(app: &SharedState, error: Option<String>) -> Result<()> {
    if let Some(message) = error {
        return Err(anyhow!(message));
    }

    let state = app.read();
    if let Some(user) = &state.current_user {
        println!("Signed in as {} <{}>", user.display_name(), user.email);
    }
    if let Some(wallet) = &state.wallet {
        println!(
            "Wallet ready: {} ({} card(s))",
            wallet.name.as_deref().unwrap_or(&wallet.id),
            state.cards.len()
        );
    }
    Ok(())
}

async fn whoami(app: &SharedState, services: &Services) -> Result<()> {
    let Some(token) = app.read().auth_token.clone() else {
        println!("Not signed in.");
        return Ok(());
    };

    let user = services
        .users
        .fetch_current_user(&token)
        .await
        .map_err(|e| anyhow!(error_message(&e)))?;

    println!("{} <{}>", user.display_name(), user.email);
    println!("  id:  {}", format_identifier(&user.id, 8, 4));
    if let Some(kyc) = user.kyc_status {
        println!("  kyc: {}", kyc);
    }
    Ok(())
}

fn report_home(snapshot: &HomeSnapshot) -> Result<()> {
    print!("{}", output::render_home(snapshot)?);
    Ok(())
}

fn report_card(snapshot: &CardSettingsSnapshot) -> Result<()> {
    print!("{}", output::render_card(snapshot)?);
    Ok(())
}
