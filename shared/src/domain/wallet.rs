//! # Wallet, Balance and Card Types

use serde::{Deserialize, Serialize};

use super::status::CardStatus;
use super::user::User;

/// Membership of a user in a shared wallet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletMember {
    pub id: Option<String>,
    pub wallet_id: Option<String>,
    pub user_id: Option<String>,
    pub role: Option<String>,
    pub joined_at: Option<String>,
    pub user: Option<User>,
}

/// A shared wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wallet {
    pub id: String,
    pub name: Option<String>,
    pub members: Option<Vec<WalletMember>>,
    pub admin_id: Option<String>,
    pub created_at: Option<String>,
}

impl Wallet {
    pub fn members(&self) -> &[WalletMember] {
        self.members.as_deref().unwrap_or_default()
    }

    pub fn is_admin(&self, user_id: &str) -> bool {
        self.admin_id.as_deref() == Some(user_id)
    }
}

/// A member's share of the pooled balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberEquity {
    pub user_id: String,
    pub balance: f64,
}

/// Pool total plus per-member equity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Balances {
    pub pool_display: Option<f64>,
    pub member_equity: Option<Vec<MemberEquity>>,
}

impl Balances {
    pub fn equity_for(&self, user_id: &str) -> Option<f64> {
        self.member_equity
            .as_ref()?
            .iter()
            .find(|entry| entry.user_id == user_id)
            .map(|entry| entry.balance)
    }
}

/// A payment card issued against a wallet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub id: Option<String>,
    pub external_card_id: Option<String>,
    pub last4: Option<String>,
    pub nickname: Option<String>,
    pub status: Option<CardStatus>,
    pub provider_name: Option<String>,
    pub wallet_id: Option<String>,
    pub user_id: Option<String>,
    pub user: Option<User>,
}

impl Card {
    /// Stable identifier for display: external id, then id, then a placeholder.
    pub fn display_id(&self) -> &str {
        self.external_card_id
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("card")
    }

    pub fn masked_display(&self) -> String {
        match &self.last4 {
            Some(last4) => format!("**** {}", last4),
            None => "****".to_string(),
        }
    }

    pub fn status_or_unknown(&self) -> CardStatus {
        self.status.unwrap_or_default()
    }

    /// Whether two values describe the same card.
    ///
    /// Ids win when both sides carry one; cards issued without a backend id
    /// fall back to the provider's external id.
    pub fn same_card(&self, other: &Card) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => match (&self.external_card_id, &other.external_card_id) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

/// Dashboard data returned by the bootstrap call.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletBootstrap {
    pub wallet: Wallet,
    pub cards: Vec<Card>,
    pub balances: Balances,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalletDetails {
    pub wallet: Wallet,
    pub balances: Option<Balances>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardDetails {
    pub card: Card,
    pub balances: Option<Balances>,
}
