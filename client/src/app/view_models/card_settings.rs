//! Card settings: details, lock, cancel and nickname for one card.

use parking_lot::RwLock;
use shared::{Balances, Card, CardStatus};

use super::{Cancellation, InFlight, Services};
use crate::app::state::SharedState;
use crate::core::error::ApiError;
use crate::core::messages::error_message;
use crate::utils::validation::validate_nickname;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardSettingsSnapshot {
    pub card: Option<Card>,
    pub balances: Option<Balances>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub debug_message: Option<String>,
}

pub struct CardSettingsViewModel {
    app: SharedState,
    services: Services,
    initial_card_id: Option<String>,
    published: RwLock<CardSettingsSnapshot>,
    in_flight: InFlight,
    cancellation: Cancellation,
}

impl CardSettingsViewModel {
    /// Opens on the first card of the current wallet.
    pub fn new(app: SharedState, services: Services) -> Self {
        let published = {
            let state = app.read();
            CardSettingsSnapshot {
                card: state.cards.first().cloned(),
                balances: state.balances.clone(),
                ..CardSettingsSnapshot::default()
            }
        };

        Self {
            initial_card_id: published.card.as_ref().and_then(|c| c.id.clone()),
            app,
            services,
            published: RwLock::new(published),
            in_flight: InFlight::default(),
            cancellation: Cancellation::default(),
        }
    }

    pub fn snapshot(&self) -> CardSettingsSnapshot {
        let mut snapshot = self.published.read().clone();
        snapshot.is_loading = self.in_flight.is_active();
        snapshot
    }

    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    /// Refresh the card and its wallet balances.
    pub async fn load(&self) {
        let Some(card_id) = self.card_id() else {
            return;
        };
        let Some(_flight) = self.in_flight.try_begin() else {
            return;
        };
        self.begin("Loading card details...".to_string());

        match self.services.cards.fetch_card(&card_id).await {
            Ok(details) => {
                if self.apply(details.card, details.balances) {
                    self.set_debug("Card details refreshed.".to_string());
                }
            }
            Err(e) => self.failed("Failed to load card", &e),
        }
    }

    pub async fn set_locked(&self, locked: bool) {
        let target = if locked {
            CardStatus::Locked
        } else {
            CardStatus::Active
        };
        self.update_status(target).await;
    }

    pub async fn set_deactivated(&self, deactivated: bool) {
        let target = if deactivated {
            CardStatus::Canceled
        } else {
            CardStatus::Active
        };
        self.update_status(target).await;
    }

    pub async fn update_nickname(&self, nickname: &str) {
        if let Some(message) = validate_nickname(nickname).error {
            self.published.write().error_message = Some(message);
            return;
        }
        let Some(card_id) = self.card_id() else {
            return;
        };
        let Some(_flight) = self.in_flight.try_begin() else {
            return;
        };
        self.begin("Updating nickname...".to_string());

        match self
            .services
            .cards
            .update_nickname(&card_id, nickname.trim())
            .await
        {
            Ok(card) => {
                if self.apply(card, None) {
                    self.set_debug("Nickname updated.".to_string());
                }
            }
            Err(e) => self.failed("Failed to update nickname", &e),
        }
    }

    async fn update_status(&self, status: CardStatus) {
        let Some(card_id) = self.card_id() else {
            return;
        };
        let Some(_flight) = self.in_flight.try_begin() else {
            return;
        };
        self.begin(format!("Updating status to {}...", status));

        match self.services.cards.update_card_status(&card_id, status).await {
            Ok(card) => {
                if self.apply(card, None) {
                    self.set_debug(format!("Card status updated to {}.", status));
                }
            }
            Err(e) => self.failed("Failed to update status", &e),
        }
    }

    fn card_id(&self) -> Option<String> {
        self.initial_card_id.clone().or_else(|| {
            self.published
                .read()
                .card
                .as_ref()
                .and_then(|c| c.id.clone())
        })
    }

    /// Publish `card` and write it back to the session. Returns `false` once cancelled.
    fn apply(&self, card: Card, balances: Option<Balances>) -> bool {
        if self.cancellation.is_cancelled() {
            return false;
        }

        {
            let mut app = self.app.write();
            app.update_card(card.clone());
            if let Some(balances) = &balances {
                app.balances = Some(balances.clone());
            }
        }

        let mut published = self.published.write();
        published.card = Some(card);
        if balances.is_some() {
            published.balances = balances;
        }
        true
    }

    fn begin(&self, debug: String) {
        let mut published = self.published.write();
        published.error_message = None;
        published.debug_message = Some(debug);
    }

    fn set_debug(&self, debug: String) {
        self.published.write().debug_message = Some(debug);
    }

    fn failed(&self, context: &str, error: &ApiError) {
        let message = error_message(error);
        tracing::warn!(error = %error, "{}", context);

        let mut published = self.published.write();
        published.debug_message = Some(format!("{}: {}", context, message));
        published.error_message = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::view_models::mocks::{self, push, MockBackend};
    use shared::CardDetails;
    use std::sync::Arc;

    fn view_model() -> (CardSettingsViewModel, Arc<MockBackend>, SharedState) {
        let app = mocks::signed_in_state();
        app.write().apply_bootstrap(mocks::bootstrap("wallet-123"));
        let backend = MockBackend::new();
        let vm = CardSettingsViewModel::new(app.clone(), backend.services());
        (vm, backend, app)
    }

    #[test]
    fn test_starts_from_first_card() {
        let (vm, _backend, _app) = view_model();

        let snapshot = vm.snapshot();

        assert_eq!(snapshot.card.and_then(|c| c.id).as_deref(), Some("card-123"));
        assert_eq!(snapshot.balances.and_then(|b| b.pool_display), Some(10.0));
    }

    #[tokio::test]
    async fn test_load_applies_card_and_balances() {
        // Arrange
        let (vm, backend, app) = view_model();
        push(
            &backend.fetch_card,
            Ok(CardDetails {
                card: mocks::card("card-123", CardStatus::Suspended),
                balances: Some(mocks::balances(99.0)),
            }),
        );

        // Act
        vm.load().await;

        // Assert
        let snapshot = vm.snapshot();
        assert_eq!(snapshot.card.and_then(|c| c.status), Some(CardStatus::Suspended));
        assert_eq!(snapshot.debug_message.as_deref(), Some("Card details refreshed."));
        assert_eq!(app.read().balances.as_ref().and_then(|b| b.pool_display), Some(99.0));
    }

    #[tokio::test]
    async fn test_lock_and_unlock() {
        // Arrange
        let (vm, backend, app) = view_model();
        push(&backend.update_card, Ok(mocks::card("card-123", CardStatus::Locked)));
        push(&backend.update_card, Ok(mocks::card("card-123", CardStatus::Active)));

        // Act
        vm.set_locked(true).await;
        let locked = app.read().cards[0].status;
        vm.set_locked(false).await;

        // Assert
        assert_eq!(locked, Some(CardStatus::Locked));
        assert_eq!(app.read().cards[0].status, Some(CardStatus::Active));
        assert_eq!(app.read().cards.len(), 1);
        assert_eq!(
            vm.snapshot().debug_message.as_deref(),
            Some("Card status updated to ACTIVE.")
        );
        assert_eq!(backend.count("update_card_status"), 2);
    }

    #[tokio::test]
    async fn test_deactivate_keeps_balances() {
        let (vm, backend, _app) = view_model();
        push(&backend.update_card, Ok(mocks::card("card-123", CardStatus::Canceled)));

        vm.set_deactivated(true).await;

        let snapshot = vm.snapshot();
        assert_eq!(snapshot.card.and_then(|c| c.status), Some(CardStatus::Canceled));
        assert_eq!(snapshot.balances.and_then(|b| b.pool_display), Some(10.0));
    }

    #[tokio::test]
    async fn test_nickname_update() {
        let (vm, backend, app) = view_model();
        let mut renamed = mocks::card("card-123", CardStatus::Active);
        renamed.nickname = Some("Travel".into());
        push(&backend.update_card, Ok(renamed));

        vm.update_nickname("  ").await;
        assert_eq!(vm.snapshot().error_message.as_deref(), Some("Nickname cannot be empty."));

        vm.update_nickname(" Travel ").await;
        assert_eq!(app.read().cards[0].nickname.as_deref(), Some("Travel"));
        assert_eq!(vm.snapshot().error_message, None);
        assert_eq!(backend.count("update_nickname"), 1);
    }

    #[tokio::test]
    async fn test_failure_keeps_card() {
        let (vm, backend, app) = view_model();
        push(&backend.update_card, Err(mocks::server(409, r#"{"error":"Card already canceled"}"#)));

        vm.set_locked(true).await;

        let snapshot = vm.snapshot();
        assert_eq!(snapshot.error_message.as_deref(), Some("Card already canceled"));
        assert_eq!(
            snapshot.debug_message.as_deref(),
            Some("Failed to update status: Card already canceled")
        );
        assert_eq!(app.read().cards[0].status, Some(CardStatus::Active));
    }

    #[tokio::test]
    async fn test_no_card_does_nothing() {
        let backend = MockBackend::new();
        let vm = CardSettingsViewModel::new(mocks::signed_in_state(), backend.services());

        vm.load().await;
        vm.set_locked(true).await;

        assert!(backend.calls().is_empty());
    }
}
