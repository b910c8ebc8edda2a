// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use user_admin::config::Config;
use user_admin::error::{AppError, Result};
use user_admin::models::{Credentials, PageResult, UserFields, UserRecord};
use user_admin::services::{CreatedUser, RemoteSource, UpdatedUser};
use user_admin::store::MemoryStore;
use user_admin::Console;

/// How the fake remote answers.
#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Online,
    /// Transport failure
    Unreachable,
    /// 403 from the API gateway
    Blocked,
    /// HTTP 500
    Broken,
}

/// Scripted remote API. Writes are accepted but never change `users`,
/// just like the real demo API.
pub struct FakeRemote {
    mode: Mutex<Mode>,
    users: Vec<UserRecord>,
    per_page: u32,
    created_id: Mutex<Option<i64>>,
    calls: Mutex<Vec<String>>,
    tokens: Mutex<Vec<Option<String>>>,
}

#[allow(dead_code)]
impl FakeRemote {
    pub fn new(mode: Mode, users: Vec<UserRecord>, per_page: u32) -> Self {
        Self {
            mode: Mutex::new(mode),
            users,
            per_page,
            created_id: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
            tokens: Mutex::new(Vec::new()),
        }
    }

    /// The twelve reqres demo users, six per page.
    pub fn online() -> Self {
        Self::new(Mode::Online, reqres_users(), 6)
    }

    pub fn offline() -> Self {
        Self::new(Mode::Unreachable, Vec::new(), 6)
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self::new(mode, reqres_users(), 6)
    }

    pub fn set_mode(&self, mode: Mode) {
        *self.mode.lock().unwrap() = mode;
    }

    /// Id the remote hands out on the next create.
    pub fn set_created_id(&self, id: Option<i64>) {
        *self.created_id.lock().unwrap() = id;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn tokens(&self) -> Vec<Option<String>> {
        self.tokens.lock().unwrap().clone()
    }

    fn record(&self, call: String, token: Option<&str>) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        self.tokens.lock().unwrap().push(token.map(str::to_string));

        match *self.mode.lock().unwrap() {
            Mode::Online => Ok(()),
            Mode::Unreachable => Err(AppError::Unreachable("connection refused".to_string())),
            Mode::Blocked => Err(AppError::Unauthorized("HTTP 403 Forbidden".to_string())),
            Mode::Broken => Err(AppError::RemoteApi("HTTP 500 Internal Server Error".to_string())),
        }
    }
}

#[async_trait]
impl RemoteSource for FakeRemote {
    async fn login(&self, credentials: &Credentials) -> Result<String> {
        self.record("login".to_string(), None)?;
        if credentials.email == "eve.holt@reqres.in" {
            Ok("remote-token".to_string())
        } else {
            Err(AppError::RemoteApi("user not found".to_string()))
        }
    }

    async fn list_users(&self, page: u32, token: Option<&str>) -> Result<PageResult> {
        self.record(format!("list:{}", page), token)?;
        let total = self.users.len() as u32;
        let start = ((page - 1) * self.per_page) as usize;
        Ok(PageResult {
            page,
            per_page: self.per_page,
            total,
            total_pages: total.div_ceil(self.per_page),
            data: self
                .users
                .iter()
                .skip(start)
                .take(self.per_page as usize)
                .cloned()
                .collect(),
        })
    }

    async fn get_user(&self, id: i64, token: Option<&str>) -> Result<UserRecord> {
        self.record(format!("get:{}", id), token)?;
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("HTTP 404 Not Found".to_string()))
    }

    async fn create_user(&self, _fields: &UserFields, token: Option<&str>) -> Result<CreatedUser> {
        self.record("create".to_string(), token)?;
        Ok(CreatedUser {
            id: *self.created_id.lock().unwrap(),
            created_at: Some("2026-01-01T00:00:00.000Z".to_string()),
        })
    }

    async fn update_user(
        &self,
        id: i64,
        _fields: &UserFields,
        token: Option<&str>,
    ) -> Result<UpdatedUser> {
        self.record(format!("update:{}", id), token)?;
        Ok(UpdatedUser {
            updated_at: Some("2026-01-02T00:00:00.000Z".to_string()),
        })
    }

    async fn delete_user(&self, id: i64, token: Option<&str>) -> Result<()> {
        self.record(format!("delete:{}", id), token)
    }
}

pub fn remote_user(id: i64, first: &str, last: &str) -> UserRecord {
    UserRecord {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
        avatar: format!("https://reqres.in/img/faces/{}-image.jpg", id),
        created_at: None,
        updated_at: None,
    }
}

pub fn reqres_users() -> Vec<UserRecord> {
    [
        ("George", "Bluth"),
        ("Janet", "Weaver"),
        ("Emma", "Wong"),
        ("Eve", "Holt"),
        ("Charles", "Morris"),
        ("Tracey", "Ramos"),
        ("Michael", "Lawson"),
        ("Lindsay", "Ferguson"),
        ("Tobias", "Funke"),
        ("Byron", "Fields"),
        ("George", "Edwards"),
        ("Rachel", "Howell"),
    ]
    .iter()
    .enumerate()
    .map(|(i, (first, last))| remote_user(i as i64 + 1, first, last))
    .collect()
}

#[allow(dead_code)]
pub fn fields(first: &str, last: &str) -> UserFields {
    UserFields {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        avatar: "http://x/y.png".to_string(),
    }
}

/// Console over a fake remote and an in-memory store.
#[allow(dead_code)]
pub fn test_console(remote: Arc<FakeRemote>) -> (Console, MemoryStore) {
    let store = MemoryStore::new();
    let console = Console::new(Config::default(), remote, Arc::new(store.clone()));
    (console, store)
}

/// Ids shown on every page of the merged list, in display order.
#[allow(dead_code)]
pub async fn all_listed_ids(console: &Console) -> Vec<i64> {
    let mut ids = Vec::new();
    let mut page = 1;
    let mut last_page = 1;
    while page <= last_page {
        let result = console.users.list(page).await.unwrap();
        last_page = last_page.max(result.total_pages);
        ids.extend(result.data.iter().map(|u| u.id));
        page += 1;
    }
    ids
}
