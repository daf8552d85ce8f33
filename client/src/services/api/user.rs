//! # Current User Endpoints

use shared::{User, UserOverview};

use super::client::ApiClient;
use crate::core::error::ApiError;

pub const CURRENT_USER_PATH: &str = "/user/me";
pub const OVERVIEW_PATH: &str = "/user/overview";

/// Fetch the user behind `auth_token`.
///
/// The token is sent explicitly, so this works before it has been stored on
/// the client (e.g. to validate a restored session).
#[tracing::instrument(skip(client, auth_token))]
pub async fn fetch_current_user(client: &ApiClient, auth_token: &str) -> Result<User, ApiError> {
    let authorization = format!("Bearer {}", auth_token);
    client
        .get(CURRENT_USER_PATH, &[("Authorization", authorization.as_str())])
        .await
}

/// Fetch the dashboard overview (user, wallets, onboarding requirements).
#[tracing::instrument(skip(client))]
pub async fn fetch_overview(client: &ApiClient) -> Result<UserOverview, ApiError> {
    let overview: UserOverview = client.get(OVERVIEW_PATH, &[]).await?;
    tracing::debug!(
        wallets = overview.wallets.len(),
        kyc_required = overview.requirements.kyc_required,
        "Overview fetched"
    );
    Ok(overview)
}
