//! # Application Layer
//!
//! Session state, its persistence and the screen view-models.
//!
//! ## Modules
//!
//! - **[`store`]**: `KeyValueStore` with memory and JSON-file backends
//! - **[`session_store`]**: the persisted login session
//! - **[`state`]**: `AppState`, shared as [`SharedState`]
//! - **[`screen_state`]**: loading/loaded/error status
//! - **[`view_models`]**: login, dashboard and card settings

pub mod screen_state;
pub mod session_store;
pub mod state;
pub mod store;
pub mod view_models;

pub use screen_state::ScreenState;
pub use session_store::SessionStore;
pub use state::{AppState, SharedState};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use view_models::{AuthViewModel, CardSettingsViewModel, HomeViewModel, Services};
