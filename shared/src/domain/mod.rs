//! # Domain Types
//!
//! Shapes the client works with after wire DTOs have been mapped.
//!
//! - [`status`] - tolerant KYC and card status enums
//! - [`user`] - users, overview, session snapshot
//! - [`wallet`] - wallets, members, balances, cards

pub mod status;
pub mod user;
pub mod wallet;

pub use status::*;
pub use user::*;
pub use wallet::*;
