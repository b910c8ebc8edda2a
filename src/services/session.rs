// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, logout and session restore.

use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{Credentials, Session};
use crate::services::remote::RemoteSource;
use crate::store::{SessionStore, SharedStore};

/// Demo account accepted when the remote API cannot be used.
pub const FALLBACK_EMAIL: &str = "eve.holt@reqres.in";
pub const FALLBACK_PASSWORD: &str = "cityslicka";
/// Token persisted for a fallback login.
pub const FALLBACK_TOKEN: &str = "QpwL5tke4Pnpja7X4";

pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";

/// Session layer over the remote login endpoint and the local store.
#[derive(Clone)]
pub struct SessionService {
    remote: Arc<dyn RemoteSource>,
    sessions: SessionStore,
}

impl SessionService {
    pub fn new(remote: Arc<dyn RemoteSource>, store: SharedStore) -> Self {
        Self {
            remote,
            sessions: SessionStore::new(store),
        }
    }

    /// Authenticate and persist the session.
    ///
    /// When the remote API refuses or is unreachable only the demo account
    /// is accepted. Any other remote failure message is passed through as
    /// `LoginFailed` for display.
    pub async fn login(&self, credentials: Credentials) -> Result<Session> {
        let token = match self.remote.login(&credentials).await {
            Ok(token) => token,
            Err(e) if e.is_degradable() => {
                tracing::warn!(error = %e, "Remote login unavailable, checking fallback account");
                if credentials.email != FALLBACK_EMAIL || credentials.password != FALLBACK_PASSWORD {
                    return Err(AppError::LoginFailed(INVALID_CREDENTIALS.to_string()));
                }
                FALLBACK_TOKEN.to_string()
            }
            Err(AppError::RemoteApi(message)) | Err(AppError::NotFound(message)) => {
                tracing::info!(email = %credentials.email, reason = %message, "Login rejected");
                return Err(AppError::LoginFailed(message));
            }
            Err(e) => return Err(e),
        };

        let session = Session {
            token,
            email: credentials.email,
        };
        self.sessions.save(&session)?;

        tracing::info!(email = %session.email, "Logged in");
        Ok(session)
    }

    /// Forget the session. Always succeeds unless the store fails.
    pub fn logout(&self) -> Result<()> {
        self.sessions.clear()?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// The persisted session, trusted without re-validation.
    pub fn restore_session(&self) -> Result<Option<Session>> {
        self.sessions.load()
    }

    /// Gate for commands that need a logged-in user.
    pub fn require_session(&self) -> Result<Session> {
        self.restore_session()?
            .ok_or_else(|| AppError::Unauthorized("Not logged in".to_string()))
    }
}
