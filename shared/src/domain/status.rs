//! # Status Enums
//!
//! KYC and card status as the backend reports them.
//!
//! Both enums decode from any string. Matching is case-insensitive and a value
//! the client does not know lands in the `Unknown` variant instead of failing
//! the whole response, so the UI always has something to render.
//!
//! ```rust
//! use shared::domain::{CardStatus, KycStatus};
//!
//! let status: CardStatus = serde_json::from_str("\"locked\"").unwrap();
//! assert_eq!(status, CardStatus::Locked);
//!
//! let kyc: KycStatus = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
//! assert_eq!(kyc, KycStatus::Unknown);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identity verification state attached to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KycStatus {
    Accepted,
    Pending,
    Processing,
    Reviewing,
    Rejected,
    #[default]
    Unknown,
}

impl KycStatus {
    /// Upper-case wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::Accepted => "ACCEPTED",
            KycStatus::Pending => "PENDING",
            KycStatus::Processing => "PROCESSING",
            KycStatus::Reviewing => "REVIEWING",
            KycStatus::Rejected => "REJECTED",
            KycStatus::Unknown => "UNKNOWN",
        }
    }

    /// Decode a raw wire string. Never fails.
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ACCEPTED" => KycStatus::Accepted,
            "PENDING" => KycStatus::Pending,
            "PROCESSING" => KycStatus::Processing,
            "REVIEWING" => KycStatus::Reviewing,
            "REJECTED" => KycStatus::Rejected,
            _ => KycStatus::Unknown,
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, KycStatus::Accepted)
    }
}

/// Lifecycle state of a payment card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardStatus {
    Active,
    Locked,
    Canceled,
    Suspended,
    #[default]
    Unknown,
}

impl CardStatus {
    /// Upper-case wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardStatus::Active => "ACTIVE",
            CardStatus::Locked => "LOCKED",
            CardStatus::Canceled => "CANCELED",
            CardStatus::Suspended => "SUSPENDED",
            CardStatus::Unknown => "UNKNOWN",
        }
    }

    /// Decode a raw wire string. Never fails.
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => CardStatus::Active,
            "LOCKED" => CardStatus::Locked,
            "CANCELED" => CardStatus::Canceled,
            "SUSPENDED" => CardStatus::Suspended,
            _ => CardStatus::Unknown,
        }
    }

    /// Short label for list rows.
    pub fn label(&self) -> &'static str {
        match self {
            CardStatus::Active => "Active",
            CardStatus::Locked => "Locked",
            CardStatus::Canceled => "Canceled",
            CardStatus::Suspended => "Suspended",
            CardStatus::Unknown => "Unknown",
        }
    }
}

macro_rules! impl_wire_string {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from_wire(s))
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(Self::from_wire(&raw))
            }
        }
    };
}

impl_wire_string!(KycStatus);
impl_wire_string!(CardStatus);
