//! # Endpoint Tests
//!
//! Every service against a local stub backend.

use super::test_support::{client_for, spawn_stub};
use crate::core::error::ApiError;
use crate::core::service::{AuthApi, CardApi, UserApi, WalletApi};
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use shared::{CardStatus, KycStatus};

fn user_json() -> Value {
    json!({"id": "user-123", "email": "chris@example.com", "name": "Chris", "kyc_status": "accepted"})
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn google_login(body: String) -> (StatusCode, Json<Value>) {
    let parsed: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    if parsed["idToken"] == "google-id-token" {
        (
            StatusCode::OK,
            Json(json!({"user": user_json(), "token": "jwt-google", "person_id": "person-1"})),
        )
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"error": "invalid id token"})))
    }
}

async fn current_user(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    match bearer(&headers).as_deref() {
        Some("Bearer explicit-token") => (StatusCode::OK, Json(user_json())),
        _ => (StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"}))),
    }
}

async fn issue_card(Path(wallet_id): Path<String>, body: String) -> Json<Value> {
    let nickname = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v["nickname"].as_str().map(str::to_string));
    Json(json!({
        "provider": "lithic",
        "external_card_id": format!("ext-{}", wallet_id),
        "last4": "4242",
        "nickname": nickname,
    }))
}

fn stub_backend() -> Router {
    Router::new()
        .route("/auth/google", post(google_login))
        .route(
            "/auth/demo",
            post(|| async { Json(json!({"user": user_json(), "token": "jwt-demo"})) }),
        )
        .route("/user/me", get(current_user))
        .route(
            "/user/overview",
            get(|| async {
                Json(json!({
                    "user": user_json(),
                    "has_wallets": true,
                    "requirements": {"kyc_required": false},
                    "wallets": [{"id": "wallet-123", "name": "House", "is_admin": true}]
                }))
            }),
        )
        .route(
            "/wallet/bootstrap",
            post(|| async {
                Json(json!({
                    "wallet": {"id": "wallet-123", "name": "House"},
                    "card": {"id": "card-123", "last4": "1234", "status": "ACTIVE"},
                    "balances": {"pool_display": 10.0, "member_equity": [{"user_id": "user-123", "balance": 5.0}]}
                }))
            }),
        )
        .route(
            "/wallets",
            post(|Json(body): Json<Value>| async move {
                Json(json!({"id": "wallet-new", "name": body["name"]}))
            }),
        )
        .route(
            "/wallets/:id",
            get(|Path(id): Path<String>| async move {
                Json(json!({"wallet": {"id": id, "members": [{"user_id": "user-123", "role": "ADMIN"}]}}))
            }),
        )
        .route(
            "/wallets/:id/join",
            post(|Path(id): Path<String>| async move { Json(json!({"id": id})) }),
        )
        .route(
            "/wallets/:id/cards",
            get(|| async {
                Json(json!({"cards": [
                    {"id": "card-1", "status": "LOCKED"},
                    {"id": "card-2", "status": "paused-by-issuer"}
                ]}))
            })
            .post(issue_card),
        )
        .route(
            "/cards/:id",
            get(|Path(id): Path<String>| async move {
                Json(json!({"card": {"id": id, "status": "active"}, "balances": {"pool_display": 42.0}}))
            }),
        )
        .route(
            "/cards/:id/status",
            patch(|Path(id): Path<String>, Json(body): Json<Value>| async move {
                Json(json!({"id": id, "status": body["status"]}))
            }),
        )
        .route(
            "/cards/:id/nickname",
            patch(|Path(id): Path<String>, Json(body): Json<Value>| async move {
                Json(json!({"id": id, "nickname": body["nickname"]}))
            }),
        )
}

#[tokio::test]
async fn test_google_login_sends_camel_case_token() {
    // Arrange
    let client = client_for(&spawn_stub(stub_backend()).await);

    // Act
    let response = client.login_with_google("google-id-token".into()).await.unwrap();

    // Assert
    assert_eq!(response.token, "jwt-google");
    assert_eq!(response.person_id.as_deref(), Some("person-1"));
    assert_eq!(response.user.kyc_status, Some(KycStatus::Accepted));
}

#[tokio::test]
async fn test_google_login_rejected_token() {
    let client = client_for(&spawn_stub(stub_backend()).await);

    let err = client.login_with_google("forged".into()).await.unwrap_err();

    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_demo_login() {
    let client = client_for(&spawn_stub(stub_backend()).await);

    let response = client.login_demo().await.unwrap();

    assert_eq!(response.user.id, "user-123");
    assert_eq!(response.person_id, None);
}

#[tokio::test]
async fn test_fetch_current_user_overrides_stored_token() {
    let client = client_for(&spawn_stub(stub_backend()).await);
    client.set_auth_token(Some("stale-token".into()));

    let user = client.fetch_current_user("explicit-token").await.unwrap();

    assert_eq!(user.email, "chris@example.com");
}

#[tokio::test]
async fn test_fetch_overview() {
    let client = client_for(&spawn_stub(stub_backend()).await);

    let overview = client.fetch_overview().await.unwrap();

    assert!(overview.has_wallets);
    assert_eq!(overview.first_wallet_id(), Some("wallet-123"));
}

#[tokio::test]
async fn test_bootstrap_maps_dashboard_data() {
    let client = client_for(&spawn_stub(stub_backend()).await);

    let bootstrap = client.bootstrap().await.unwrap();

    assert_eq!(bootstrap.wallet.id, "wallet-123");
    assert_eq!(bootstrap.cards.len(), 1);
    assert_eq!(bootstrap.cards[0].status, Some(CardStatus::Active));
    assert_eq!(bootstrap.balances.equity_for("user-123"), Some(5.0));
}

#[tokio::test]
async fn test_wallet_create_join_and_details() {
    let client = client_for(&spawn_stub(stub_backend()).await);

    let created = client.create_wallet("Road trip").await.unwrap();
    let joined = client.join_wallet("invite-77").await.unwrap();
    let details = client.fetch_wallet_details("wallet-123").await.unwrap();

    assert_eq!(created.id, "wallet-new");
    assert_eq!(created.name.as_deref(), Some("Road trip"));
    assert_eq!(joined.id, "invite-77");
    assert_eq!(details.wallet.members().len(), 1);
    assert!(details.balances.is_none());
}

#[tokio::test]
async fn test_list_cards_tolerates_unknown_status() {
    let client = client_for(&spawn_stub(stub_backend()).await);

    let cards = client.list_cards("wallet-123").await.unwrap();

    assert_eq!(cards[0].status, Some(CardStatus::Locked));
    assert_eq!(cards[1].status, Some(CardStatus::Unknown));
}

#[tokio::test]
async fn test_create_card_with_and_without_nickname() {
    let client = client_for(&spawn_stub(stub_backend()).await);

    let named = client.create_card("wallet-123", Some("  Groceries ")).await.unwrap();
    let blank = client.create_card("wallet-123", Some("   ")).await.unwrap();

    assert_eq!(named.nickname.as_deref(), Some("Groceries"));
    assert_eq!(named.external_card_id.as_deref(), Some("ext-wallet-123"));
    assert_eq!(named.status, Some(CardStatus::Active));
    assert_eq!(named.wallet_id.as_deref(), Some("wallet-123"));
    assert_eq!(blank.nickname, None);
}

#[tokio::test]
async fn test_card_details_and_updates() {
    let client = client_for(&spawn_stub(stub_backend()).await);

    let details = client.fetch_card("card-9").await.unwrap();
    let locked = client.update_card_status("card-9", CardStatus::Locked).await.unwrap();
    let renamed = client.update_nickname("card-9", "Travel").await.unwrap();

    assert_eq!(details.card.id.as_deref(), Some("card-9"));
    assert_eq!(details.balances.and_then(|b| b.pool_display), Some(42.0));
    assert_eq!(locked.status, Some(CardStatus::Locked));
    assert_eq!(renamed.nickname.as_deref(), Some("Travel"));
}

#[tokio::test]
async fn test_unknown_route_surfaces_server_error() {
    let client = client_for(&format!("{}/v2", spawn_stub(stub_backend()).await));

    let err = client.bootstrap().await.unwrap_err();

    assert!(matches!(err, ApiError::Server { status: 404, .. }));
}
