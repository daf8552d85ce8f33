//! # API Client
//!
//! Typed HTTP client for the wallet backend.
//!
//! Every call goes through [`ApiClient::request`], which
//!
//! 1. appends the path to the base URL,
//! 2. sets JSON `Content-Type`/`Accept` headers,
//! 3. attaches `Authorization: Bearer <token>` unless the caller passed one,
//! 4. classifies the response into [`ApiError`] or decodes the body.

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    Card, CardDetails, CardStatus, LoginResponse, User, UserOverview, Wallet, WalletBootstrap,
    WalletDetails,
};
use std::time::Instant;

use crate::config::AppConfig;
use crate::core::error::ApiError;
use crate::core::service::{AuthApi, AuthTokenSink, CardApi, UserApi, WalletApi};

const JSON: &str = "application/json";

/// Extra request headers as `(name, value)` pairs.
pub type Headers<'a> = &'a [(&'a str, &'a str)];

/// HTTP client for communicating with the wallet API.
///
/// Holds a pooled `reqwest::Client`, so one instance should be shared
/// (`Arc<ApiClient>`) for the lifetime of the process. The only mutable state
/// is the bearer token; no response data is kept.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    auth_token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a client for `config.base_url`.
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::Transport)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: RwLock::new(None),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Store a token so later requests carry it unless overridden.
    pub fn set_auth_token(&self, token: Option<String>) {
        *self.auth_token.write() = token;
    }

    pub fn auth_token(&self) -> Option<String> {
        self.auth_token.read().clone()
    }

    /// Full URL for `path`, keeping any path prefix of the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let url = Url::parse(&joined).map_err(|_| ApiError::InvalidUrl)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(ApiError::InvalidUrl),
        }
    }

    /// `GET` a JSON resource.
    pub async fn get<R>(&self, path: &str, headers: Headers<'_>) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        self.request::<(), R>(Method::GET, path, None, headers).await
    }

    /// Send a request with a JSON body.
    pub async fn send<B, R>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        headers: Headers<'_>,
    ) -> Result<R, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        self.request(method, path, Some(body), headers).await
    }

    /// Send a request without a body.
    pub async fn send_empty<R>(
        &self,
        method: Method,
        path: &str,
        headers: Headers<'_>,
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        self.request::<(), R>(method, path, None, headers).await
    }

    /// Build the request: default JSON headers, bearer token, caller headers last.
    pub(crate) fn prepare<B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        headers: Headers<'_>,
    ) -> RequestBuilder
    where
        B: Serialize + ?Sized,
    {
        let mut builder = self
            .client
            .request(method, url)
            .header(reqwest::header::CONTENT_TYPE, JSON)
            .header(reqwest::header::ACCEPT, JSON);

        let caller_sets_auth = headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("authorization"));
        if !caller_sets_auth {
            if let Some(token) = self.auth_token.read().as_deref() {
                builder = builder.bearer_auth(token);
            }
        }

        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        if let Some(body) = body {
            builder = builder.json(body);
        }
        builder
    }

    /// Perform a request and decode the JSON response.
    #[tracing::instrument(
        name = "api_request",
        skip(self, body, headers),
        fields(request_id = %uuid::Uuid::new_v4())
    )]
    pub async fn request<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        headers: Headers<'_>,
    ) -> Result<R, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let start = Instant::now();

        let response = self
            .prepare(method, url.clone(), body, headers)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(url = %url, error = %e, "Network error");
                ApiError::Transport(e)
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(ApiError::Transport)?;
        let duration_ms = start.elapsed().as_millis();

        if !status.is_success() {
            let body = (!bytes.is_empty()).then(|| String::from_utf8_lossy(&bytes).into_owned());
            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                body = body.as_deref().unwrap_or("<no body>"),
                duration_ms,
                "API error"
            );
            return Err(ApiError::Server {
                status: status.as_u16(),
                body,
            });
        }

        if bytes.is_empty() {
            tracing::warn!(url = %url, status = status.as_u16(), "Empty response body");
            return Err(ApiError::NoData);
        }

        tracing::debug!(status = status.as_u16(), duration_ms, "API response");
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(url = %url, error = %e, "Response parse error");
            ApiError::Decoding(e)
        })
    }
}

/// Percent-encode a value for use as a single path segment.
pub(crate) fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

impl AuthTokenSink for ApiClient {
    fn set_auth_token(&self, token: Option<String>) {
        ApiClient::set_auth_token(self, token)
    }
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login_with_google(&self, id_token: String) -> Result<LoginResponse, ApiError> {
        crate::services::api::auth::login_with_google(self, id_token).await
    }

    async fn login_demo(&self) -> Result<LoginResponse, ApiError> {
        crate::services::api::auth::login_demo(self).await
    }
}

#[async_trait]
impl UserApi for ApiClient {
    async fn fetch_current_user(&self, auth_token: &str) -> Result<User, ApiError> {
        crate::services::api::user::fetch_current_user(self, auth_token).await
    }

    async fn fetch_overview(&self) -> Result<UserOverview, ApiError> {
        crate::services::api::user::fetch_overview(self).await
    }
}

#[async_trait]
impl WalletApi for ApiClient {
    async fn bootstrap(&self) -> Result<WalletBootstrap, ApiError> {
        crate::services::api::wallet::bootstrap(self).await
    }

    async fn create_wallet(&self, name: &str) -> Result<Wallet, ApiError> {
        crate::services::api::wallet::create_wallet(self, name).await
    }

    async fn join_wallet(&self, wallet_id: &str) -> Result<Wallet, ApiError> {
        crate::services::api::wallet::join_wallet(self, wallet_id).await
    }

    async fn fetch_wallet_details(&self, wallet_id: &str) -> Result<WalletDetails, ApiError> {
        crate::services::api::wallet::fetch_wallet_details(self, wallet_id).await
    }
}

#[async_trait]
impl CardApi for ApiClient {
    async fn list_cards(&self, wallet_id: &str) -> Result<Vec<Card>, ApiError> {
        crate::services::api::card::list_cards(self, wallet_id).await
    }

    async fn create_card(&self, wallet_id: &str, nickname: Option<&str>) -> Result<Card, ApiError> {
        crate::services::api::card::create_card(self, wallet_id, nickname).await
    }

    async fn fetch_card(&self, card_id: &str) -> Result<CardDetails, ApiError> {
        crate::services::api::card::fetch_card(self, card_id).await
    }

    async fn update_card_status(&self, card_id: &str, status: CardStatus) -> Result<Card, ApiError> {
        crate::services::api::card::update_card_status(self, card_id, status).await
    }

    async fn update_nickname(&self, card_id: &str, nickname: &str) -> Result<Card, ApiError> {
        crate::services::api::card::update_nickname(self, card_id, nickname).await
    }
}
