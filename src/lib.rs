// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! user-admin: administration console for the reqres demo user API
//!
//! This crate provides the session and user-management layers of the
//! console. Writes are mirrored into a local override store so the console
//! stays usable, and consistent across runs, when the API is unreachable.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use error::Result;
use models::{Credentials, Session, UserFields, UserRecord};
use services::{RemoteSource, ReqresClient, SessionService, UserDirectory};
use std::sync::Arc;
use store::{FileStore, SharedStore};
use validator::Validate;

/// Shared application state.
pub struct Console {
    pub config: Config,
    pub session: SessionService,
    pub users: UserDirectory,
}

impl Console {
    /// Wire the console from explicit dependencies.
    pub fn new(config: Config, remote: Arc<dyn RemoteSource>, store: SharedStore) -> Self {
        let session = SessionService::new(remote.clone(), store.clone());
        let users = UserDirectory::new(remote, store, config.fallback_per_page);
        Self {
            config,
            session,
            users,
        }
    }

    /// Wire the console against the configured API and store file.
    pub fn from_config(config: Config) -> Result<Self> {
        let remote = Arc::new(ReqresClient::from_config(&config)?);
        let store = Arc::new(FileStore::open(&config.store_path)?);
        Ok(Self::new(config, remote, store))
    }

    // ─── Form submission ─────────────────────────────────────────
    //
    // Field checks run here, before any remote call; the layers below
    // accept whatever they are given.

    /// Submit the login form.
    pub async fn login(&self, credentials: Credentials) -> Result<Session> {
        credentials.validate()?;
        self.session.login(credentials).await
    }

    /// Submit the "new user" form.
    pub async fn create_user(&self, fields: UserFields) -> Result<UserRecord> {
        fields.validate()?;
        self.users.create(fields).await
    }

    /// Submit the "edit user" form.
    pub async fn update_user(&self, id: i64, fields: UserFields) -> Result<UserRecord> {
        fields.validate()?;
        self.users.update(id, fields).await
    }
}
