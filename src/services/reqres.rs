// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! reqres.in API client.
//!
//! Handles:
//! - Login (token exchange)
//! - Paginated user listing and single-user lookup
//! - Create / update / delete (the demo API accepts but does not keep them)
//! - Mapping HTTP failures onto the degradable error kinds

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Credentials, PageResult, UserFields, UserRecord};
use crate::services::remote::{CreatedUser, RemoteSource, UpdatedUser};

/// reqres API client.
#[derive(Clone)]
pub struct ReqresClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ReqresClient {
    /// Create a client for `base_url` (e.g. `https://reqres.in/api`).
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.api_url,
            config.api_key.clone(),
            config.request_timeout,
        )
    }

    /// Start a request with the API key and bearer token attached.
    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, url = %url, "Remote request");

        let mut builder = self.http.request(method, url);
        if let Some(key) = &self.api_key {
            builder = builder.header("x-api-key", key);
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send and check status; transport failures become `Unreachable`.
    async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| AppError::Unreachable(e.to_string()))?;
        check_response(response).await
    }

    async fn send_json<T: for<'de> Deserialize<'de>>(&self, builder: RequestBuilder) -> Result<T> {
        self.send(builder)
            .await?
            .json()
            .await
            .map_err(|e| AppError::RemoteApi(format!("{}{}", JSON_PARSE_PREFIX, e)))
    }
}

/// Error body returned by the API, e.g. `{"error": "Missing password"}`.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Prefix of the message used when the error body carries no `{error}`.
const STATUS_PREFIX: &str = "HTTP ";
const JSON_PARSE_PREFIX: &str = "JSON parse error: ";

/// Check response status and return error if not successful.
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.error)
        .unwrap_or_else(|_| format!("{}{}", STATUS_PREFIX, status));

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            tracing::warn!(status = %status, "Remote API refused the request");
            Err(AppError::Unauthorized(message))
        }
        StatusCode::NOT_FOUND => Err(AppError::NotFound(message)),
        _ => {
            tracing::error!(status = %status, body = %body, "Remote API request failed");
            Err(AppError::RemoteApi(message))
        }
    }
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

/// Login failures without an `{error}` body are shown as `Error: <detail>`.
fn login_error(err: AppError) -> AppError {
    match err {
        AppError::RemoteApi(message)
            if message.starts_with(STATUS_PREFIX) || message.starts_with(JSON_PARSE_PREFIX) =>
        {
            AppError::RemoteApi(format!("Error: {}", message))
        }
        other => other,
    }
}

#[derive(Deserialize)]
struct SingleUserResponse {
    data: UserRecord,
}

/// The API echoes ids back as strings on create.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(i64),
    Text(String),
}

impl WireId {
    fn into_id(self) -> Option<i64> {
        match self {
            WireId::Number(id) => Some(id),
            WireId::Text(raw) => raw.trim().parse().ok(),
        }
    }
}

#[derive(Deserialize)]
struct CreateResponse {
    #[serde(default)]
    id: Option<WireId>,
    #[serde(rename = "createdAt", default)]
    created_at: Option<String>,
}

#[derive(Deserialize)]
struct UpdateResponse {
    #[serde(rename = "updatedAt", default)]
    updated_at: Option<String>,
}

#[async_trait]
impl RemoteSource for ReqresClient {
    async fn login(&self, credentials: &Credentials) -> Result<String> {
        let body = serde_json::json!({
            "email": credentials.email,
            "password": credentials.password,
        });
        let response: LoginResponse = self
            .send_json(self.request(Method::POST, "/login", None).json(&body))
            .await
            .map_err(login_error)?;
        Ok(response.token)
    }

    async fn list_users(&self, page: u32, token: Option<&str>) -> Result<PageResult> {
        let builder = self
            .request(Method::GET, "/users", token)
            .query(&[("page", page.to_string())]);
        self.send_json(builder).await
    }

    async fn get_user(&self, id: i64, token: Option<&str>) -> Result<UserRecord> {
        let path = format!("/users/{}", id);
        let response: SingleUserResponse =
            self.send_json(self.request(Method::GET, &path, token)).await?;
        Ok(response.data)
    }

    async fn create_user(&self, fields: &UserFields, token: Option<&str>) -> Result<CreatedUser> {
        let response: CreateResponse = self
            .send_json(self.request(Method::POST, "/users", token).json(fields))
            .await?;
        Ok(CreatedUser {
            id: response.id.and_then(WireId::into_id),
            created_at: response.created_at,
        })
    }

    async fn update_user(
        &self,
        id: i64,
        fields: &UserFields,
        token: Option<&str>,
    ) -> Result<UpdatedUser> {
        let path = format!("/users/{}", id);
        let response: UpdateResponse = self
            .send_json(self.request(Method::PUT, &path, token).json(fields))
            .await?;
        Ok(UpdatedUser {
            updated_at: response.updated_at,
        })
    }

    async fn delete_user(&self, id: i64, token: Option<&str>) -> Result<()> {
        let path = format!("/users/{}", id);
        self.send(self.request(Method::DELETE, &path, token)).await?;
        Ok(())
    }
}
