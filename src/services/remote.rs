// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The Remote Source seam: what the console needs from the user API.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Credentials, PageResult, UserFields, UserRecord};

/// Result of a remote create. Either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatedUser {
    pub id: Option<i64>,
    pub created_at: Option<String>,
}

/// Result of a remote update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatedUser {
    pub updated_at: Option<String>,
}

/// Paginated, unreliable collection of user records.
///
/// Implementations report rejected credentials as `AppError::Unauthorized`
/// and transport failures as `AppError::Unreachable`; both put the caller
/// into degraded mode. `token` is the session bearer token, when one exists.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Exchange credentials for a token.
    async fn login(&self, credentials: &Credentials) -> Result<String>;

    /// One page of the remote collection (1-indexed).
    async fn list_users(&self, page: u32, token: Option<&str>) -> Result<PageResult>;

    async fn get_user(&self, id: i64, token: Option<&str>) -> Result<UserRecord>;

    async fn create_user(&self, fields: &UserFields, token: Option<&str>) -> Result<CreatedUser>;

    async fn update_user(
        &self,
        id: i64,
        fields: &UserFields,
        token: Option<&str>,
    ) -> Result<UpdatedUser>;

    async fn delete_user(&self, id: i64, token: Option<&str>) -> Result<()>;
}
