//! Persisted login session on top of a [`KeyValueStore`].

use std::sync::Arc;

use shared::{KycStatus, SessionSnapshot, User};

use super::store::KeyValueStore;
use crate::core::error::StoreError;

const ACCESS_TOKEN: &str = "accessToken";
const USER_ID: &str = "userId";
const USER_EMAIL: &str = "userEmail";
const USER_NAME: &str = "userName";
const USER_KYC_STATUS: &str = "userKycStatus";
const PERSON_ID: &str = "personId";

const ALL_KEYS: [&str; 6] = [
    ACCESS_TOKEN,
    USER_ID,
    USER_EMAIL,
    USER_NAME,
    USER_KYC_STATUS,
    PERSON_ID,
];

#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The saved session, if token, user id and email are all present.
    pub fn load(&self) -> Option<SessionSnapshot> {
        let token = self.store.get(ACCESS_TOKEN)?;
        let id = self.store.get(USER_ID)?;
        let email = self.store.get(USER_EMAIL)?;

        Some(SessionSnapshot {
            user: User {
                id,
                email,
                name: self.store.get(USER_NAME),
                kyc_status: self
                    .store
                    .get(USER_KYC_STATUS)
                    .map(|raw| KycStatus::from_wire(&raw)),
            },
            token,
            person_id: self.store.get(PERSON_ID),
        })
    }

    /// Write every key; absent optional values remove theirs.
    pub fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        self.store.set(ACCESS_TOKEN, &snapshot.token)?;
        self.store.set(USER_ID, &snapshot.user.id)?;
        self.store.set(USER_EMAIL, &snapshot.user.email)?;
        self.put_optional(USER_NAME, snapshot.user.name.as_deref())?;
        self.put_optional(
            USER_KYC_STATUS,
            snapshot.user.kyc_status.as_ref().map(KycStatus::as_str),
        )?;
        self.put_optional(PERSON_ID, snapshot.person_id.as_deref())
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        for key in ALL_KEYS {
            self.store.remove(key)?;
        }
        Ok(())
    }

    fn put_optional(&self, key: &str, value: Option<&str>) -> Result<(), StoreError> {
        match value {
            Some(value) => self.store.set(key, value),
            None => self.store.remove(key),
        }
    }
}
