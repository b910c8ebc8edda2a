// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User directory: the effective user list behind the console.
//!
//! Every operation tries the remote API first. When the remote refuses or
//! cannot be reached the operation continues against the local override
//! store alone (degraded mode). Writes are always recorded locally, since
//! the demo API does not keep them.

use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{PageResult, UserFields, UserRecord};
use crate::services::reconcile::{filter_page, merge_page};
use crate::services::remote::RemoteSource;
use crate::store::{OverrideStore, SessionStore, SharedStore};
use crate::time_utils::now_rfc3339;

/// Outcome of a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deletion {
    pub id: i64,
    /// False if the id had already been deleted before this call
    pub newly_deleted: bool,
}

/// Reconciles the remote collection with local overrides.
#[derive(Clone)]
pub struct UserDirectory {
    remote: Arc<dyn RemoteSource>,
    overrides: OverrideStore,
    sessions: SessionStore,
    fallback_per_page: u32,
}

impl UserDirectory {
    pub fn new(remote: Arc<dyn RemoteSource>, store: SharedStore, fallback_per_page: u32) -> Self {
        Self {
            remote,
            overrides: OverrideStore::new(store.clone()),
            sessions: SessionStore::new(store),
            fallback_per_page: fallback_per_page.max(1),
        }
    }

    pub fn overrides(&self) -> &OverrideStore {
        &self.overrides
    }

    /// One page (1-indexed) of the merged user list.
    pub async fn list(&self, page: u32) -> Result<PageResult> {
        if page == 0 {
            return Err(AppError::field("page", "Page must be at least 1"));
        }

        let token = self.sessions.token()?;
        let (remote, per_page) = self.fetch_remote(page, token.as_deref()).await?;
        let overrides = self.overrides.custom_users()?;
        let deleted = self.overrides.deleted_ids()?;

        let result = merge_page(&remote, &overrides, &deleted, page, per_page);
        tracing::info!(
            page,
            per_page = result.per_page,
            total = result.total,
            shown = result.data.len(),
            "Listed users"
        );
        Ok(result)
    }

    /// `list(page)` narrowed to records whose name or email contains `term`.
    pub async fn search(&self, page: u32, term: &str) -> Result<PageResult> {
        let result = self.list(page).await?;
        Ok(filter_page(result, term))
    }

    /// The effective record for `id`.
    pub async fn get(&self, id: i64) -> Result<UserRecord> {
        if self.overrides.deleted_ids()?.contains(&id) {
            return Err(not_found(id));
        }
        if let Some(local) = self.overrides.custom_users()?.into_iter().find(|u| u.id == id) {
            return Ok(local);
        }

        let token = self.sessions.token()?;
        match self.remote.get_user(id, token.as_deref()).await {
            Ok(record) => Ok(record),
            Err(AppError::NotFound(_)) => Err(not_found(id)),
            Err(e) if e.is_degradable() => {
                tracing::warn!(user_id = id, error = %e, "Remote lookup unavailable");
                Err(not_found(id))
            }
            Err(e) => Err(e),
        }
    }

    /// Create a user; the record is kept locally at the top of the list.
    pub async fn create(&self, fields: UserFields) -> Result<UserRecord> {
        let token = self.sessions.token()?;
        let created = match self.remote.create_user(&fields, token.as_deref()).await {
            Ok(created) => created,
            Err(e) if e.is_degradable() => {
                tracing::warn!(error = %e, "Remote create unavailable, creating locally");
                Default::default()
            }
            Err(e) => return Err(e),
        };

        let id = match created.id {
            Some(id) if !self.overrides.is_known_id(id)? => id,
            Some(id) => {
                tracing::warn!(user_id = id, "Remote id already used locally, assigning a new one");
                self.local_id()?
            }
            None => self.local_id()?,
        };

        let mut record = UserRecord::from_fields(id, fields);
        record.created_at = Some(created.created_at.unwrap_or_else(now_rfc3339));
        self.overrides.insert_created(record.clone())?;

        tracing::info!(user_id = id, "User created");
        Ok(record)
    }

    /// Edit a user; the edit is kept locally as an override.
    pub async fn update(&self, id: i64, fields: UserFields) -> Result<UserRecord> {
        if self.overrides.deleted_ids()?.contains(&id) {
            return Err(not_found(id));
        }

        let token = self.sessions.token()?;
        let updated_at = match self.remote.update_user(id, &fields, token.as_deref()).await {
            Ok(updated) => updated.updated_at,
            Err(e) if e.is_degradable() || matches!(e, AppError::NotFound(_)) => {
                tracing::warn!(user_id = id, error = %e, "Remote update skipped, updating locally");
                None
            }
            Err(e) => return Err(e),
        };

        let record = self
            .overrides
            .upsert_edit(id, fields, updated_at.unwrap_or_else(now_rfc3339))?;

        tracing::info!(user_id = id, "User updated");
        Ok(record)
    }

    /// Delete a user. Deleting twice is harmless.
    pub async fn delete(&self, id: i64) -> Result<Deletion> {
        let token = self.sessions.token()?;
        match self.remote.delete_user(id, token.as_deref()).await {
            Ok(()) => {}
            Err(e) if e.is_degradable() || matches!(e, AppError::NotFound(_)) => {
                tracing::warn!(user_id = id, error = %e, "Remote delete skipped, deleting locally");
            }
            Err(e) => return Err(e),
        }

        let newly_deleted = self.overrides.mark_deleted(id)?;
        tracing::info!(user_id = id, newly_deleted, "User deleted");
        Ok(Deletion { id, newly_deleted })
    }

    /// Fetch remote page `page` in a single request.
    ///
    /// Returns the records and the page size to paginate with. A degradable
    /// failure yields no records and the fallback page size.
    async fn fetch_remote(&self, page: u32, token: Option<&str>) -> Result<(Vec<UserRecord>, u32)> {
        match self.remote.list_users(page, token).await {
            Ok(remote) => {
                let per_page = if remote.per_page > 0 {
                    remote.per_page
                } else {
                    self.fallback_per_page
                };
                Ok((remote.data, per_page))
            }
            Err(e) if e.is_degradable() => {
                tracing::warn!(page, error = %e, "Remote list unavailable, using local data only");
                Ok((Vec::new(), self.fallback_per_page))
            }
            Err(e) => Err(e),
        }
    }

    /// Timestamp-based id not used by any override or deletion marker.
    fn local_id(&self) -> Result<i64> {
        let custom = self.overrides.custom_users()?;
        let deleted = self.overrides.deleted_ids()?;

        let mut id = Utc::now().timestamp_millis();
        while deleted.contains(&id) || custom.iter().any(|u| u.id == id) {
            id += 1;
        }
        Ok(id)
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}
