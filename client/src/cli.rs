//! # CLI Interface
//!
//! Command-line structure for `wallet-cli` using `clap` derive.

use clap::{Parser, Subcommand};

/// Shared wallet client.
///
/// Every command restores the saved session first, so sign in once with
/// `login-demo` or `login-google` and later commands reuse it.
#[derive(Parser, Debug)]
#[command(
    name = "wallet-cli",
    about = "Shared wallet and card client",
    version,
    propagate_version = true
)]
pub struct WalletCli {
    /// Override the API base URL from the environment.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in as the demo account.
    LoginDemo,
    /// Sign in with a Google ID token.
    LoginGoogle {
        #[arg(long, env = "WALLET_GOOGLE_ID_TOKEN")]
        id_token: String,
    },
    /// Load and print the wallet dashboard.
    Dashboard,
    /// Switch the dashboard to another wallet.
    SelectWallet { wallet_id: String },
    /// Create a wallet and open it.
    CreateWallet { name: String },
    /// Join a wallet by id or invite code.
    JoinWallet { wallet_id: String },
    /// Issue a card in the current wallet.
    CreateCard {
        #[arg(long)]
        nickname: Option<String>,
    },
    /// Manage the first card of the current wallet.
    Card {
        #[command(subcommand)]
        action: CardAction,
    },
    /// Show the signed-in user.
    Whoami,
    /// Forget the saved session.
    SignOut,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Show,
    Lock,
    Unlock,
    Cancel,
    Reactivate,
    Nickname { nickname: String },
}
