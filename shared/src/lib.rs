//! # Shared Wallet Types
//!
//! Contract between the wallet client and the backend API.
//!
//! ## Structure
//!
//! - **[`dto`]**: wire shapes (request bodies, raw responses)
//! - **[`domain`]**: what the client keeps in session state after mapping
//! - **[`utils`]**: display formatting shared by front ends
//!
//! Every DTO maps into its domain type through `From`, so services can write
//! `let wallet: Wallet = dto.into();` and never hand wire shapes to callers.
//!
//! ```rust
//! use shared::dto::WalletBootstrapDto;
//! use shared::domain::WalletBootstrap;
//!
//! let dto: WalletBootstrapDto = serde_json::from_str(
//!     r#"{"wallet": {"id": "w1"}, "cards": [], "balances": {"pool_display": 12.0}}"#,
//! ).unwrap();
//! let bootstrap = WalletBootstrap::from(dto);
//! assert_eq!(bootstrap.balances.pool_display, Some(12.0));
//! ```

pub mod domain;
pub mod dto;
pub mod utils;

pub use domain::*;
pub use dto::*;
pub use utils::*;
