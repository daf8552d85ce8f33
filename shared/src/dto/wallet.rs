//! # Wallet DTOs
//!
//! Wire shapes for the wallet endpoints and their mapping to [`crate::domain`].

use serde::{Deserialize, Serialize};

use super::card::CardDto;
use crate::domain::{
    Balances, Card, MemberEquity, User, Wallet, WalletBootstrap, WalletDetails, WalletMember,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletMemberDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub wallet_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub joined_at: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletDto {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub admin_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub members: Option<Vec<WalletMemberDto>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberEquityDto {
    pub user_id: String,
    pub balance: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalancesDto {
    #[serde(default)]
    pub pool_display: Option<f64>,
    #[serde(default)]
    pub member_equity: Option<Vec<MemberEquityDto>>,
}

/// Response of `POST /wallet/bootstrap`.
///
/// Older backends return a single `card`, newer ones a `cards` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletBootstrapDto {
    pub wallet: WalletDto,
    #[serde(default)]
    pub card: Option<CardDto>,
    #[serde(default)]
    pub cards: Option<Vec<CardDto>>,
    #[serde(default)]
    pub balances: BalancesDto,
}

/// Response of `GET /wallets/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletDetailsDto {
    pub wallet: WalletDto,
    #[serde(default)]
    pub balances: Option<BalancesDto>,
}

/// Body for `POST /wallets`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateWalletRequest {
    pub name: String,
}

impl From<WalletMemberDto> for WalletMember {
    fn from(dto: WalletMemberDto) -> Self {
        WalletMember {
            id: dto.id,
            wallet_id: dto.wallet_id,
            user_id: dto.user_id,
            role: dto.role,
            joined_at: dto.joined_at,
            user: dto.user,
        }
    }
}

impl From<WalletDto> for Wallet {
    fn from(dto: WalletDto) -> Self {
        Wallet {
            id: dto.id,
            name: dto.name,
            members: dto
                .members
                .map(|members| members.into_iter().map(WalletMember::from).collect()),
            admin_id: dto.admin_id,
            created_at: dto.created_at,
        }
    }
}

impl From<MemberEquityDto> for MemberEquity {
    fn from(dto: MemberEquityDto) -> Self {
        MemberEquity {
            user_id: dto.user_id,
            balance: dto.balance,
        }
    }
}

impl From<BalancesDto> for Balances {
    fn from(dto: BalancesDto) -> Self {
        Balances {
            pool_display: dto.pool_display,
            member_equity: dto
                .member_equity
                .map(|entries| entries.into_iter().map(MemberEquity::from).collect()),
        }
    }
}

impl From<WalletBootstrapDto> for WalletBootstrap {
    fn from(dto: WalletBootstrapDto) -> Self {
        let mut cards: Vec<Card> = Vec::new();
        for card in dto.card.into_iter().chain(dto.cards.into_iter().flatten()) {
            let card = Card::from(card);
            if !cards.iter().any(|existing| existing.same_card(&card)) {
                cards.push(card);
            }
        }

        WalletBootstrap {
            wallet: dto.wallet.into(),
            cards,
            balances: dto.balances.into(),
        }
    }
}

impl From<WalletDetailsDto> for WalletDetails {
    fn from(dto: WalletDetailsDto) -> Self {
        WalletDetails {
            wallet: dto.wallet.into(),
            balances: dto.balances.map(Balances::from),
        }
    }
}
