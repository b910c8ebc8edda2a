//! Persisted session (`token` + `userEmail`).

use super::{keys, SharedStore};
use crate::error::Result;
use crate::models::Session;

#[derive(Clone)]
pub struct SessionStore {
    store: SharedStore,
}

impl SessionStore {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// The stored session, if both token and email are present.
    pub fn load(&self) -> Result<Option<Session>> {
        let token = self.store.get(keys::TOKEN)?.filter(|t| !t.is_empty());
        let email = self.store.get(keys::USER_EMAIL)?.filter(|e| !e.is_empty());

        Ok(match (token, email) {
            (Some(token), Some(email)) => Some(Session { token, email }),
            _ => None,
        })
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        self.store.set(keys::TOKEN, &session.token)?;
        self.store.set(keys::USER_EMAIL, &session.email)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(keys::TOKEN)?;
        self.store.remove(keys::USER_EMAIL)
    }

    /// Bearer token for remote calls, if logged in.
    pub fn token(&self) -> Result<Option<String>> {
        Ok(self.store.get(keys::TOKEN)?.filter(|t| !t.is_empty()))
    }
}
