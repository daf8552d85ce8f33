//! # Wallet Endpoints
//!
//! Bootstrap, creation, joining and details of shared wallets.

use reqwest::Method;
use shared::{
    CreateWalletRequest, Wallet, WalletBootstrap, WalletBootstrapDto, WalletDetails,
    WalletDetailsDto, WalletDto,
};

use super::client::{segment, ApiClient};
use crate::core::error::ApiError;

pub const BOOTSTRAP_PATH: &str = "/wallet/bootstrap";
pub const WALLETS_PATH: &str = "/wallets";

/// Ensure a default wallet, membership and card exist and return dashboard data.
#[tracing::instrument(skip(client))]
pub async fn bootstrap(client: &ApiClient) -> Result<WalletBootstrap, ApiError> {
    let dto: WalletBootstrapDto = client.send_empty(Method::POST, BOOTSTRAP_PATH, &[]).await?;
    let bootstrap = WalletBootstrap::from(dto);
    tracing::info!(
        wallet_id = %bootstrap.wallet.id,
        cards = bootstrap.cards.len(),
        "Wallet bootstrapped"
    );
    Ok(bootstrap)
}

/// Create a wallet with the current user as admin.
#[tracing::instrument(skip(client))]
pub async fn create_wallet(client: &ApiClient, name: &str) -> Result<Wallet, ApiError> {
    let request = CreateWalletRequest {
        name: name.to_string(),
    };
    let dto: WalletDto = client.send(Method::POST, WALLETS_PATH, &request, &[]).await?;
    tracing::info!(wallet_id = %dto.id, "Wallet created");
    Ok(dto.into())
}

/// Join an existing wallet by id or invite code.
#[tracing::instrument(skip(client))]
pub async fn join_wallet(client: &ApiClient, wallet_id: &str) -> Result<Wallet, ApiError> {
    let path = format!("{}/{}/join", WALLETS_PATH, segment(wallet_id));
    let dto: WalletDto = client.send_empty(Method::POST, &path, &[]).await?;
    tracing::info!(wallet_id = %dto.id, "Joined wallet");
    Ok(dto.into())
}

/// Wallet with members and balances.
#[tracing::instrument(skip(client))]
pub async fn fetch_wallet_details(
    client: &ApiClient,
    wallet_id: &str,
) -> Result<WalletDetails, ApiError> {
    let path = format!("{}/{}", WALLETS_PATH, segment(wallet_id));
    let dto: WalletDetailsDto = client.get(&path, &[]).await?;
    Ok(dto.into())
}
