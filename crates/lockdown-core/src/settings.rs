//! Persisted-configuration boundary
//!
//! The restricted-id lists live in a single named record owned by the
//! host's settings store. This module defines the record shape, the store
//! trait the registry talks to, and an in-memory implementation for tests
//! and embedding.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::ItemId;

/// The single persisted configuration record
///
/// Both lists are overwritten wholesale on every save (administrator
/// submission or deletion prune); last writer wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LockdownSettings {
    /// Ids of items which cannot be edited, trashed or deleted
    #[serde(default)]
    pub locked_ids: Vec<ItemId>,
    /// Ids of items which cannot be trashed or deleted
    #[serde(default)]
    pub protected_ids: Vec<ItemId>,
}

impl LockdownSettings {
    /// True iff neither list contains any id
    pub fn is_empty(&self) -> bool {
        self.locked_ids.is_empty() && self.protected_ids.is_empty()
    }
}

/// Storage boundary for the lockdown settings record
///
/// Implementations must treat a missing or malformed record as the empty
/// default on load rather than surfacing a user-visible error; `Err` is
/// reserved for genuine storage failures.
pub trait SettingsStore {
    /// Load the settings record, defaulting to empty when absent
    ///
    /// # Errors
    ///
    /// Returns `LockdownError::Persistence` if the underlying store cannot
    /// be read at all.
    fn load(&self) -> Result<LockdownSettings>;

    /// Overwrite the settings record wholesale
    ///
    /// # Errors
    ///
    /// Returns `LockdownError::Persistence` if the write fails, or
    /// `LockdownError::Serialization` if the record cannot be encoded.
    fn save(&self, settings: &LockdownSettings) -> Result<()>;
}

/// In-memory settings store
///
/// Backed by a `RefCell` so saves work through a shared reference, the
/// same way a connection-backed store would. Single-threaded by design,
/// matching the request-scoped use of the registry.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    record: RefCell<LockdownSettings>,
}

impl InMemorySettingsStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a settings record
    pub fn with_settings(settings: LockdownSettings) -> Self {
        Self {
            record: RefCell::new(settings),
        }
    }

    /// Snapshot the currently stored record
    pub fn snapshot(&self) -> LockdownSettings {
        self.record.borrow().clone()
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn load(&self) -> Result<LockdownSettings> {
        Ok(self.record.borrow().clone())
    }

    fn save(&self, settings: &LockdownSettings) -> Result<()> {
        *self.record.borrow_mut() = settings.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_empty() {
        let settings = LockdownSettings::default();
        assert!(settings.is_empty());
    }

    #[test]
    fn test_missing_lists_deserialize_as_empty() {
        // A record written by an older host may omit either list entirely.
        let settings: LockdownSettings = serde_json::from_str("{}").unwrap();
        assert!(settings.is_empty());

        let settings: LockdownSettings =
            serde_json::from_str(r#"{"locked_ids":[7]}"#).unwrap();
        assert_eq!(settings.locked_ids, vec![ItemId(7)]);
        assert!(settings.protected_ids.is_empty());
    }

    #[test]
    fn test_in_memory_store_round_trip() {
        let store = InMemorySettingsStore::new();
        let settings = LockdownSettings {
            locked_ids: vec![ItemId(1), ItemId(2)],
            protected_ids: vec![ItemId(3)],
        };

        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
    }
}
