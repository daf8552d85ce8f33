//! # Command Output
//!
//! Plain-text rendering of view-model snapshots for `wallet-cli`. A snapshot
//! carrying an error renders as `Err` so `main` exits non-zero.

use std::fmt::Write;

use anyhow::{anyhow, Result};
use shared::format_currency;

use wallet_client::app::view_models::{CardSettingsSnapshot, HomeSnapshot};
use wallet_client::app::ScreenState;

pub const ONBOARDING: &str =
    "You are not in a wallet yet. Create one or join with an invite code.";

pub fn render_home(snapshot: &HomeSnapshot) -> Result<String> {
    if let ScreenState::Error(message) = &snapshot.state {
        return Err(anyhow!(message.clone()));
    }
    if let Some(message) = &snapshot.error_message {
        return Err(anyhow!(message.clone()));
    }

    let mut out = String::new();
    if let Some(status) = &snapshot.status_message {
        writeln!(out, "{}", status)?;
    }

    if snapshot.show_onboarding {
        writeln!(out, "{}", ONBOARDING)?;
        return Ok(out);
    }

    let Some(wallet) = &snapshot.wallet else {
        writeln!(out, "No wallet loaded.")?;
        return Ok(out);
    };

    let name = snapshot
        .selected_wallet_name()
        .or(wallet.name.as_deref())
        .unwrap_or(&wallet.id);
    writeln!(out, "Wallet: {} ({})", name, wallet.id)?;
    writeln!(out, "  Pool balance: {}", snapshot.pool_balance_text())?;
    writeln!(out, "  Your equity:  {}", snapshot.member_equity_text())?;
    if snapshot.kyc_required() {
        writeln!(out, "  KYC required before creating wallets.")?;
    }

    if snapshot.wallets.len() > 1 {
        writeln!(out, "Wallets:")?;
        for summary in &snapshot.wallets {
            let marker = if Some(summary.id.as_str()) == snapshot.selected_wallet_id.as_deref() {
                "*"
            } else {
                " "
            };
            writeln!(
                out,
                "  {} {} ({})",
                marker,
                summary.name.as_deref().unwrap_or("Unnamed"),
                summary.id
            )?;
        }
    }

    writeln!(out, "Cards:")?;
    if snapshot.cards.is_empty() {
        writeln!(out, "  none")?;
    }
    for card in &snapshot.cards {
        writeln!(
            out,
            "  {}  {:<9} {}",
            card.masked_display(),
            card.status_or_unknown().label(),
            card.nickname.as_deref().unwrap_or("")
        )?;
    }

    let members = snapshot.member_rows();
    if !members.is_empty() {
        writeln!(out, "Members:")?;
        for row in members {
            writeln!(
                out,
                "  {:<20} {:<8} {:<12} {}",
                row.name, row.role, row.status, row.amount
            )?;
        }
    }
    Ok(out)
}

pub fn render_card(snapshot: &CardSettingsSnapshot) -> Result<String> {
    if let Some(message) = &snapshot.error_message {
        return Err(anyhow!(message.clone()));
    }
    if let Some(message) = &snapshot.debug_message {
        tracing::debug!(%message, "Card settings finished");
    }

    let mut out = String::new();
    let Some(card) = &snapshot.card else {
        writeln!(out, "No card in this wallet yet.")?;
        return Ok(out);
    };

    writeln!(out, "Card {}", card.masked_display())?;
    writeln!(out, "  Status:   {}", card.status_or_unknown().label())?;
    if let Some(nickname) = &card.nickname {
        writeln!(out, "  Nickname: {}", nickname)?;
    }
    if let Some(provider) = &card.provider_name {
        writeln!(out, "  Provider: {}", provider)?;
    }
    if let Some(pool) = snapshot.balances.as_ref().and_then(|b| b.pool_display) {
        writeln!(out, "  Pool:     {}", format_currency(Some(pool)))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Balances, Card, CardStatus, MemberEquity, User, Wallet, WalletMember};

    fn user() -> User {
        User {
            id: "user-123".into(),
            email: "chris@example.com".into(),
            name: Some("Chris".into()),
            kyc_status: None,
        }
    }

    fn balances() -> Balances {
        Balances {
            pool_display: Some(10.0),
            member_equity: Some(vec![MemberEquity {
                user_id: "user-123".into(),
                balance: 5.0,
            }]),
        }
    }

    fn card() -> Card {
        Card {
            id: Some("card-123".into()),
            last4: Some("1234".into()),
            nickname: Some("Groceries".into()),
            status: Some(CardStatus::Locked),
            provider_name: Some("lithic".into()),
            ..Card::default()
        }
    }

    #[test]
    fn test_render_home_lists_wallet_cards_and_members() {
        let snapshot = HomeSnapshot {
            current_user: Some(user()),
            wallet: Some(Wallet {
                id: "wallet-123".into(),
                name: Some("House".into()),
                members: Some(vec![WalletMember {
                    user_id: Some("user-123".into()),
                    role: Some("ADMIN".into()),
                    user: Some(user()),
                    ..WalletMember::default()
                }]),
                admin_id: None,
                created_at: None,
            }),
            balances: Some(balances()),
            cards: vec![card()],
            state: ScreenState::Loaded,
            ..HomeSnapshot::default()
        };

        let text = render_home(&snapshot).expect("rendered");

        assert!(text.contains("Wallet: House (wallet-123)"));
        assert!(text.contains("Pool balance: $10"));
        assert!(text.contains("Your equity:  $5"));
        assert!(text.contains("**** 1234  Locked    Groceries"));
        assert!(text.contains("Chris"));
        assert!(!text.contains("KYC required"));
    }

    #[test]
    fn test_render_home_onboarding() {
        let snapshot = HomeSnapshot {
            show_onboarding: true,
            status_message: Some("Card created.".into()),
            ..HomeSnapshot::default()
        };

        let text = render_home(&snapshot).expect("rendered");

        assert_eq!(text, format!("Card created.\n{}\n", ONBOARDING));
    }

    #[test]
    fn test_render_home_error_is_err() {
        let snapshot = HomeSnapshot {
            state: ScreenState::Error("Session expired.".into()),
            ..HomeSnapshot::default()
        };
        let err = render_home(&snapshot).unwrap_err();
        assert_eq!(err.to_string(), "Session expired.");

        let snapshot = HomeSnapshot {
            error_message: Some("Complete KYC before creating a wallet.".into()),
            ..HomeSnapshot::default()
        };
        assert!(render_home(&snapshot).is_err());
    }

    #[test]
    fn test_render_card() {
        let snapshot = CardSettingsSnapshot {
            card: Some(card()),
            balances: Some(balances()),
            debug_message: Some("Status updated".into()),
            ..CardSettingsSnapshot::default()
        };

        let text = render_card(&snapshot).expect("rendered");

        assert!(text.starts_with("Card **** 1234\n"));
        assert!(text.contains("Status:   Locked"));
        assert!(text.contains("Nickname: Groceries"));
        assert!(text.contains("Provider: lithic"));
        assert!(text.contains("Pool:     $10"));
    }

    #[test]
    fn test_render_card_without_card() {
        let text = render_card(&CardSettingsSnapshot::default()).expect("rendered");
        assert_eq!(text, "No card in this wallet yet.\n");

        let failed = CardSettingsSnapshot {
            error_message: Some("Card not found".into()),
            ..CardSettingsSnapshot::default()
        };
        assert_eq!(render_card(&failed).unwrap_err().to_string(), "Card not found");
    }
}
