// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Field rules shared by the user form and the login form.
//!
//! Each function is wired into a `#[derive(Validate)]` struct through
//! `custom(function = ...)` and carries the message shown next to the field.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;
use validator::{ValidateUrl, ValidationError};

const MIN_NAME_CHARS: usize = 2;
const MIN_PASSWORD_CHARS: usize = 6;

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn check_name(value: &str, required: &'static str, too_short: &'static str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(failure("required", required));
    }
    if trimmed.chars().count() < MIN_NAME_CHARS {
        return Err(failure("length", too_short));
    }
    Ok(())
}

pub fn validate_first_name(value: &str) -> Result<(), ValidationError> {
    check_name(
        value,
        "First name is required",
        "First name must be at least 2 characters",
    )
}

pub fn validate_last_name(value: &str) -> Result<(), ValidationError> {
    check_name(
        value,
        "Last name is required",
        "Last name must be at least 2 characters",
    )
}

/// Something@something.something, with no whitespace and a single `@` per side.
pub fn is_email(value: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
    });
    regex.is_match(value)
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("required", "Email is required"));
    }
    if !is_email(value) {
        return Err(failure("email", "Invalid email format"));
    }
    Ok(())
}

pub fn validate_avatar(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("required", "Profile image link is required"));
    }
    if !value.validate_url() {
        return Err(failure("url", "Invalid URL format"));
    }
    Ok(())
}

pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(failure("required", "Password is required"));
    }
    if value.chars().count() < MIN_PASSWORD_CHARS {
        return Err(failure(
            "length",
            "Password must be at least 6 characters",
        ));
    }
    Ok(())
}
