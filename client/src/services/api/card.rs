//! # Card Endpoints
//!
//! Listing, issuing and updating cards.

use reqwest::Method;
use shared::{
    Card, CardDetails, CardDetailsDto, CardDto, CardListResponse, CardNicknameUpdateRequest,
    CardStatus, CardStatusUpdateRequest, IssueCardRequest, IssueCardResponse,
};

use super::client::{segment, ApiClient};
use crate::core::error::ApiError;

fn wallet_cards_path(wallet_id: &str) -> String {
    format!("/wallets/{}/cards", segment(wallet_id))
}

fn card_path(card_id: &str) -> String {
    format!("/cards/{}", segment(card_id))
}

/// Cards issued against a wallet.
#[tracing::instrument(skip(client))]
pub async fn list_cards(client: &ApiClient, wallet_id: &str) -> Result<Vec<Card>, ApiError> {
    let response: CardListResponse = client.get(&wallet_cards_path(wallet_id), &[]).await?;
    Ok(response.cards.into_iter().map(Card::from).collect())
}

/// Issue a card for the current user in `wallet_id`.
///
/// The nickname is trimmed; a blank one sends no body at all.
#[tracing::instrument(skip(client))]
pub async fn create_card(
    client: &ApiClient,
    wallet_id: &str,
    nickname: Option<&str>,
) -> Result<Card, ApiError> {
    let path = wallet_cards_path(wallet_id);
    let nickname = nickname.map(str::trim).filter(|n| !n.is_empty());

    let response: IssueCardResponse = match nickname {
        Some(nickname) => {
            let request = IssueCardRequest {
                nickname: nickname.to_string(),
            };
            client.send(Method::POST, &path, &request, &[]).await?
        }
        None => client.send_empty(Method::POST, &path, &[]).await?,
    };

    let card = response.into_domain(wallet_id);
    tracing::info!(card = %card.display_id(), "Card issued");
    Ok(card)
}

/// Card with the balances of its wallet.
#[tracing::instrument(skip(client))]
pub async fn fetch_card(client: &ApiClient, card_id: &str) -> Result<CardDetails, ApiError> {
    let dto: CardDetailsDto = client.get(&card_path(card_id), &[]).await?;
    Ok(dto.into())
}

/// Lock, unlock, cancel or reactivate a card.
#[tracing::instrument(skip(client))]
pub async fn update_card_status(
    client: &ApiClient,
    card_id: &str,
    status: CardStatus,
) -> Result<Card, ApiError> {
    let path = format!("{}/status", card_path(card_id));
    let request = CardStatusUpdateRequest { status };
    let dto: CardDto = client.send(Method::PATCH, &path, &request, &[]).await?;
    tracing::info!(card_id, status = %status, "Card status updated");
    Ok(dto.into())
}

#[tracing::instrument(skip(client))]
pub async fn update_nickname(
    client: &ApiClient,
    card_id: &str,
    nickname: &str,
) -> Result<Card, ApiError> {
    let path = format!("{}/nickname", card_path(card_id));
    let request = CardNicknameUpdateRequest {
        nickname: nickname.to_string(),
    };
    let dto: CardDto = client.send(Method::PATCH, &path, &request, &[]).await?;
    Ok(dto.into())
}
