// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local override collections: `customUsers` and `deletedUsers`.
//!
//! `customUsers` ordering rule:
//! - a locally created record is inserted at the front, so created records
//!   are ordered newest first;
//! - the first edit of a remote-origin record appends an override at the
//!   back;
//! - editing a record that already has an entry keeps its position.
//!
//! The merged user list shows `customUsers` in exactly this order.

use super::{keys, SharedStore};
use crate::error::Result;
use crate::models::{UserFields, UserRecord};
use std::collections::BTreeSet;

/// Typed access to the override collections in a [`super::KeyValueStore`].
#[derive(Clone)]
pub struct OverrideStore {
    store: SharedStore,
}

impl OverrideStore {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// All locally created or edited records, in display order.
    pub fn custom_users(&self) -> Result<Vec<UserRecord>> {
        match self.store.get(keys::CUSTOM_USERS)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_custom_users(&self, users: &[UserRecord]) -> Result<()> {
        let json = serde_json::to_string(users)?;
        self.store.set(keys::CUSTOM_USERS, &json)?;
        tracing::debug!(count = users.len(), "Saved custom users");
        Ok(())
    }

    /// Ids that must never be shown again.
    pub fn deleted_ids(&self) -> Result<BTreeSet<i64>> {
        match self.store.get(keys::DELETED_USERS)? {
            Some(raw) => {
                let ids: Vec<i64> = serde_json::from_str(&raw)?;
                Ok(ids.into_iter().collect())
            }
            None => Ok(BTreeSet::new()),
        }
    }

    fn save_deleted_ids(&self, ids: &BTreeSet<i64>) -> Result<()> {
        let json = serde_json::to_string(&ids.iter().collect::<Vec<_>>())?;
        self.store.set(keys::DELETED_USERS, &json)
    }

    /// Insert a newly created record at the front of `customUsers`.
    pub fn insert_created(&self, record: UserRecord) -> Result<()> {
        let mut users = self.custom_users()?;
        users.retain(|u| u.id != record.id);
        users.insert(0, record);
        self.save_custom_users(&users)
    }

    /// Apply an edit to the override for `id`, creating one at the back if
    /// the record is only known remotely. Returns the stored override.
    pub fn upsert_edit(&self, id: i64, fields: UserFields, updated_at: String) -> Result<UserRecord> {
        let mut users = self.custom_users()?;

        let record = match users.iter_mut().find(|u| u.id == id) {
            Some(existing) => {
                existing.apply(fields);
                existing.updated_at = Some(updated_at);
                existing.clone()
            }
            None => {
                let mut record = UserRecord::from_fields(id, fields);
                record.updated_at = Some(updated_at);
                users.push(record.clone());
                record
            }
        };

        self.save_custom_users(&users)?;
        Ok(record)
    }

    /// Drop any override for `id` and hide it for good.
    ///
    /// Returns `true` if the id was not already marked deleted.
    pub fn mark_deleted(&self, id: i64) -> Result<bool> {
        let mut users = self.custom_users()?;
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() != before {
            self.save_custom_users(&users)?;
        }

        let mut deleted = self.deleted_ids()?;
        let inserted = deleted.insert(id);
        if inserted {
            self.save_deleted_ids(&deleted)?;
        }
        Ok(inserted)
    }

    /// True if `id` is already used by an override or a deletion marker.
    pub fn is_known_id(&self, id: i64) -> Result<bool> {
        Ok(self.deleted_ids()?.contains(&id) || self.custom_users()?.iter().any(|u| u.id == id))
    }
}
