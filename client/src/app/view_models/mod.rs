//! # View-Models
//!
//! Async screen logic for login, the wallet dashboard and card settings.
//! Each view-model publishes a snapshot of its fields, runs at most one
//! action at a time and can be cancelled when its screen goes away.

pub mod auth;
pub mod card_settings;
pub mod home;

#[cfg(test)]
pub(crate) mod mocks;

pub use auth::{AuthSnapshot, AuthViewModel};
pub use card_settings::{CardSettingsSnapshot, CardSettingsViewModel};
pub use home::{HomeSnapshot, HomeViewModel, MemberRow};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::service::{AuthApi, CardApi, UserApi, WalletApi};
use crate::services::api::ApiClient;

/// Backend services handed to every view-model.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthApi>,
    pub users: Arc<dyn UserApi>,
    pub wallets: Arc<dyn WalletApi>,
    pub cards: Arc<dyn CardApi>,
}

impl Services {
    /// Every service backed by the same HTTP client.
    pub fn from_client(client: Arc<ApiClient>) -> Self {
        Self {
            auth: client.clone(),
            users: client.clone(),
            wallets: client.clone(),
            cards: client,
        }
    }
}

/// Single-flight gate: a second action while one runs is rejected.
#[derive(Debug, Default)]
pub(crate) struct InFlight {
    active: AtomicBool,
}

impl InFlight {
    /// Claim the gate; `None` when an action is already running.
    pub(crate) fn try_begin(&self) -> Option<FlightGuard<'_>> {
        self.active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| FlightGuard {
                active: &self.active,
            })
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

/// Releases the gate on drop, including on early return.
pub(crate) struct FlightGuard<'a> {
    active: &'a AtomicBool,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
    }
}

/// Set once the owning screen is gone; pending results are then dropped.
#[derive(Debug, Default)]
pub(crate) struct Cancellation {
    cancelled: AtomicBool,
}

impl Cancellation {
    pub(crate) fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_flight_rejects_overlap_until_released() {
        let gate = InFlight::default();

        let first = gate.try_begin();
        assert!(first.is_some());
        assert!(gate.try_begin().is_none());
        assert!(gate.is_active());

        drop(first);
        assert!(!gate.is_active());
        assert!(gate.try_begin().is_some());
    }

    #[test]
    fn test_cancellation_sticks() {
        let cancellation = Cancellation::default();
        assert!(!cancellation.is_cancelled());

        cancellation.cancel();

        assert!(cancellation.is_cancelled());
    }
}
