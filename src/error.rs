// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared by the library and the CLI.

use std::collections::BTreeMap;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The remote API rejected the request (401/403) or no session exists.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Transport-level failure talking to the remote API.
    #[error("Remote API unreachable: {0}")]
    Unreachable(String),

    /// Client-side field checks failed; keyed by field name.
    #[error("Validation failed: {}", format_field_errors(.0))]
    Validation(BTreeMap<String, Vec<String>>),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Login was refused; the message is shown to the user as-is.
    #[error("{0}")]
    LoginFailed(String),

    #[error("Remote API error: {0}")]
    RemoteApi(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True for failures that switch an operation into degraded mode
    /// (local store only) instead of failing it.
    pub fn is_degradable(&self) -> bool {
        matches!(self, AppError::Unauthorized(_) | AppError::Unreachable(_))
    }

    /// Build a validation error for a single field.
    pub fn field(field: &str, message: &str) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.to_string(), vec![message.to_string()]);
        AppError::Validation(errors)
    }

    /// Per-field messages if this is a validation error.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

fn format_field_errors(errors: &BTreeMap<String, Vec<String>>) -> String {
    errors
        .iter()
        .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }
        AppError::Validation(fields)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(format!("Invalid stored JSON: {}", err))
    }
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, AppError>;
