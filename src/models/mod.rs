// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod session;
pub mod user;
pub mod validation;

pub use session::{Credentials, Session};
pub use user::{PageResult, UserFields, UserRecord};
