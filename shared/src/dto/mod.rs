//! # Data Transfer Objects (DTOs)
//!
//! Request and response bodies exchanged with the wallet API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Google and demo login
//! - [`wallet`] - bootstrap, wallet details, wallet creation
//! - [`card`] - card list, issue, status and nickname updates
//! - [`error`] - `{"error": "..."}` envelope
//!
//! ## Serialization Format
//!
//! - **Responses**: snake_case keys, matching Rust field names
//! - **Requests**: camelCase keys via `#[serde(rename_all = "camelCase")]`
//! - **Statuses**: upper-case strings, decoded tolerantly (see [`crate::domain::status`])
//!
//! ## Example
//!
//! ```text
//! POST /auth/google
//! Content-Type: application/json
//!
//! { "idToken": "eyJhbGciOiJSUzI1NiIs..." }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//!
//! {
//!   "user": { "id": "user-123", "email": "chris@example.com", "kyc_status": "ACCEPTED" },
//!   "token": "eyJhbGciOiJIUzI1NiIs...",
//!   "person_id": "person-123"
//! }
//! ```

pub mod auth;
pub mod card;
pub mod error;
pub mod wallet;

pub use auth::*;
pub use card::*;
pub use error::*;
pub use wallet::*;
