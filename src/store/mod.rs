//! Local persistence (string key-value store).
//!
//! Everything the console keeps between runs goes through [`KeyValueStore`]:
//! the session and the local override collections. Structured values are
//! stored JSON-encoded, one key per collection.

pub mod file;
pub mod memory;
pub mod overrides;
pub mod session;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use overrides::OverrideStore;
pub use session::SessionStore;

use crate::error::Result;
use std::sync::Arc;

/// Storage key names as constants.
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const USER_EMAIL: &str = "userEmail";
    /// Locally created or edited records (JSON array)
    pub const CUSTOM_USERS: &str = "customUsers";
    /// Ids hidden from the merged list (JSON array)
    pub const DELETED_USERS: &str = "deletedUsers";
}

/// Minimal get/set/remove interface over string values.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Store handle shared between the session and override layers.
pub type SharedStore = Arc<dyn KeyValueStore>;
