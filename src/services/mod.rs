// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod directory;
pub mod reconcile;
pub mod remote;
pub mod reqres;
pub mod session;

pub use directory::{Deletion, UserDirectory};
pub use remote::{CreatedUser, RemoteSource, UpdatedUser};
pub use reqres::ReqresClient;
pub use session::SessionService;
