//! # Authentication DTOs

use serde::{Deserialize, Serialize};

use crate::domain::{SessionSnapshot, User};

/// Body for `POST /auth/google`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoogleLoginRequest {
    pub id_token: String,
}

/// Authentication response (Google or demo login).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
    #[serde(default)]
    pub person_id: Option<String>,
}

impl LoginResponse {
    pub fn to_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user.clone(),
            token: self.token.clone(),
            person_id: self.person_id.clone(),
        }
    }
}
