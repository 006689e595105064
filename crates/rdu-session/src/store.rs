//! Session store
//!
//! Persists the session record as five namespaced string entries in a
//! profile-scoped [`KeyValueStore`].

use rdu_storage::KeyValueStore;

use crate::record::{AuthResponse, SessionRecord, SubscriptionStatus};
use crate::Result;

const KEY_TOKEN: &str = "rdu_token";
const KEY_NAME: &str = "rdu_name";
const KEY_EMAIL: &str = "rdu_email";
const KEY_ROLE: &str = "rdu_role";
const KEY_STATUS: &str = "rdu_status";

/// Storage keys of the persisted record.
pub const SESSION_KEYS: [&str; 5] = [KEY_TOKEN, KEY_NAME, KEY_EMAIL, KEY_ROLE, KEY_STATUS];

/// Wire names accepted for the subscription status, highest precedence first.
pub const STATUS_SOURCE_KEYS: [&str; 2] = ["subscriptionStatus", "accountStatus"];

/// What guards and pages need from session persistence.
pub trait SessionStorage {
    /// Persist a fresh record from an authentication response, replacing any
    /// previous one.
    fn save(&self, response: &AuthResponse) -> Result<()>;

    /// Current record. Missing or unreadable entries come back empty.
    fn read(&self) -> SessionRecord;

    /// Erase everything stored for the profile.
    fn clear(&self) -> Result<()>;
}

pub struct SessionStore<B> {
    backend: B,
}

impl<B: KeyValueStore> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Parse a raw login/registration body and save it.
    pub fn save_json(&self, body: &str) -> Result<SessionRecord> {
        let response = AuthResponse::from_json(body)?;
        self.save(&response)?;
        Ok(Self::canonical(&response))
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    /// First non-empty status among [`STATUS_SOURCE_KEYS`], else PENDING.
    pub fn resolve_status(response: &AuthResponse) -> String {
        STATUS_SOURCE_KEYS
            .iter()
            .filter_map(|key| response.status_field(key))
            .find(|value| !value.is_empty())
            .unwrap_or(SubscriptionStatus::default().as_str())
            .to_string()
    }

    fn canonical(response: &AuthResponse) -> SessionRecord {
        SessionRecord {
            token: response.token.clone(),
            name: response.name.clone(),
            email: response.email.clone(),
            role: response.role.clone(),
            status: Self::resolve_status(response),
        }
    }

    fn entry(&self, key: &str) -> String {
        match self.backend.get(key) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read session entry");
                String::new()
            }
        }
    }
}

impl<B: KeyValueStore> SessionStorage for SessionStore<B> {
    fn save(&self, response: &AuthResponse) -> Result<()> {
        let record = Self::canonical(response);

        self.backend.set_many(&[
            (KEY_TOKEN, record.token.as_str()),
            (KEY_NAME, record.name.as_str()),
            (KEY_EMAIL, record.email.as_str()),
            (KEY_ROLE, record.role.as_str()),
            (KEY_STATUS, record.status.as_str()),
        ])?;

        tracing::info!(
            email = %record.email,
            role = %record.role,
            status = %record.status,
            "Saved session"
        );

        Ok(())
    }

    fn read(&self) -> SessionRecord {
        SessionRecord {
            token: self.entry(KEY_TOKEN),
            name: self.entry(KEY_NAME),
            email: self.entry(KEY_EMAIL),
            role: self.entry(KEY_ROLE),
            status: self.entry(KEY_STATUS),
        }
    }

    fn clear(&self) -> Result<()> {
        self.backend.clear()?;
        tracing::info!("Cleared session");
        Ok(())
    }
}

impl<B: Clone> Clone for SessionStore<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
        }
    }
}
