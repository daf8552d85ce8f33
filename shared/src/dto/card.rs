//! # Card DTOs

use serde::{Deserialize, Serialize};

use super::wallet::BalancesDto;
use crate::domain::{Balances, Card, CardDetails, CardStatus, User};

/// Card as the backend sends it; the status stays a raw string until mapped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub external_card_id: Option<String>,
    #[serde(default)]
    pub last4: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub wallet_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Response of `GET /wallets/{id}/cards`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardListResponse {
    #[serde(default)]
    pub cards: Vec<CardDto>,
}

/// Response of `GET /cards/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDetailsDto {
    pub card: CardDto,
    #[serde(default)]
    pub balances: Option<BalancesDto>,
}

/// Body for `POST /wallets/{id}/cards`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssueCardRequest {
    pub nickname: String,
}

/// Response of `POST /wallets/{id}/cards`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueCardResponse {
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub external_card_id: Option<String>,
    #[serde(default)]
    pub last4: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub status: Option<CardStatus>,
}

impl IssueCardResponse {
    /// The issue endpoint does not echo the wallet or a backend id.
    pub fn into_domain(self, wallet_id: &str) -> Card {
        Card {
            id: None,
            external_card_id: self.external_card_id,
            last4: self.last4,
            nickname: self.nickname,
            status: Some(self.status.unwrap_or(CardStatus::Active)),
            provider_name: self.provider,
            wallet_id: Some(wallet_id.to_string()),
            user_id: None,
            user: None,
        }
    }
}

/// Body for `PATCH /cards/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardStatusUpdateRequest {
    pub status: CardStatus,
}

/// Body for `PATCH /cards/{id}/nickname`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardNicknameUpdateRequest {
    pub nickname: String,
}

impl From<CardDto> for Card {
    fn from(dto: CardDto) -> Self {
        Card {
            id: dto.id,
            external_card_id: dto.external_card_id,
            last4: dto.last4,
            nickname: dto.nickname,
            status: dto.status.as_deref().map(CardStatus::from_wire),
            provider_name: dto.provider_name,
            wallet_id: dto.wallet_id,
            user_id: dto.user_id,
            user: dto.user,
        }
    }
}

impl From<CardDetailsDto> for CardDetails {
    fn from(dto: CardDetailsDto) -> Self {
        CardDetails {
            card: dto.card.into(),
            balances: dto.balances.map(Balances::from),
        }
    }
}
