//! # User and Overview Types

use serde::{Deserialize, Serialize};

use super::status::KycStatus;

/// Authenticated user as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kyc_status: Option<KycStatus>,
}

impl User {
    /// Name for display, falling back to the email address.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}

/// Onboarding requirements attached to the overview.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Requirements {
    #[serde(default)]
    pub kyc_required: bool,
}

/// One wallet the user belongs to, as listed by the overview endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletSummary {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub member_count: Option<u32>,
    #[serde(default)]
    pub card_count: Option<u32>,
    #[serde(default)]
    pub has_card_for_current_user: Option<bool>,
    #[serde(default)]
    pub joined_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Dashboard overview: who the user is and which wallets they can open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserOverview {
    pub user: User,
    pub has_wallets: bool,
    #[serde(default)]
    pub requirements: Requirements,
    #[serde(default)]
    pub wallets: Vec<WalletSummary>,
}

impl UserOverview {
    pub fn first_wallet_id(&self) -> Option<&str> {
        self.wallets.first().map(|w| w.id.as_str())
    }

    pub fn contains_wallet(&self, wallet_id: &str) -> bool {
        self.wallets.iter().any(|w| w.id == wallet_id)
    }
}

/// Minimal persisted session: who is signed in and with which token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub user: User,
    pub token: String,
    pub person_id: Option<String>,
}
