//! # Backend API Client Module
//!
//! HTTP client for the shared wallet backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient, request pipeline, trait implementations
//! ├── auth.rs     - Google and demo login
//! ├── user.rs     - Current user and overview
//! ├── wallet.rs   - Bootstrap, create, join, details
//! └── card.rs     - List, issue, status, nickname
//! ```
//!
//! Each endpoint module exposes free functions taking `&ApiClient`; the
//! client implements the service traits in [`crate::core::service`] by
//! delegating to them.

pub mod auth;
pub mod card;
pub mod client;
pub mod user;
pub mod wallet;

pub use client::{ApiClient, Headers};

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod tests;
