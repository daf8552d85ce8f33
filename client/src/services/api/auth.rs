//! # Authentication Endpoints
//!
//! Google token exchange and the fixed demo account.

use reqwest::Method;
use shared::{GoogleLoginRequest, LoginResponse};

use super::client::ApiClient;
use crate::core::error::ApiError;

pub const GOOGLE_LOGIN_PATH: &str = "/auth/google";
pub const DEMO_LOGIN_PATH: &str = "/auth/demo";

/// Exchange a Google ID token for a backend session.
#[tracing::instrument(skip(client, id_token))]
pub async fn login_with_google(
    client: &ApiClient,
    id_token: String,
) -> Result<LoginResponse, ApiError> {
    tracing::info!("Attempting Google login");
    let request = GoogleLoginRequest { id_token };

    let response: LoginResponse = client
        .send(Method::POST, GOOGLE_LOGIN_PATH, &request, &[])
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Google login failed"))?;

    tracing::info!(user_id = %response.user.id, "Google login successful");
    Ok(response)
}

/// Sign in as the demo account.
#[tracing::instrument(skip(client))]
pub async fn login_demo(client: &ApiClient) -> Result<LoginResponse, ApiError> {
    tracing::info!("Attempting demo login");

    let response: LoginResponse = client
        .send_empty(Method::POST, DEMO_LOGIN_PATH, &[])
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Demo login failed"))?;

    tracing::info!(user_id = %response.user.id, "Demo login successful");
    Ok(response)
}
