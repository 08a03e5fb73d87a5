//! Item id registry
//!
//! Holds the raw locked and protected id sets loaded from the settings
//! store and exposes the effective (extension-mapped) views the gate and
//! guard consult. Constructed explicitly and injected as a collaborator;
//! there is no process-wide instance.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::errors::Result;
use crate::extensions::HostExtensions;
use crate::model::ItemId;
use crate::settings::{LockdownSettings, SettingsStore};

/// Registry of locked and protected item ids
///
/// The raw sets mirror the persisted record; the effective sets returned
/// by [`locked_ids`](Self::locked_ids) and
/// [`protected_ids`](Self::protected_ids) are the raw sets passed through
/// the host's extension transforms, so they need not equal what is stored.
#[derive(Debug)]
pub struct ItemIdRegistry<S, E> {
    raw_locked: HashSet<ItemId>,
    raw_protected: HashSet<ItemId>,
    store: S,
    extensions: E,
}

impl<S: SettingsStore, E: HostExtensions> ItemIdRegistry<S, E> {
    /// Create a registry with empty sets; call [`load`](Self::load) to
    /// populate it from the store
    pub fn new(store: S, extensions: E) -> Self {
        Self {
            raw_locked: HashSet::new(),
            raw_protected: HashSet::new(),
            store,
            extensions,
        }
    }

    /// Populate the raw sets from the persisted settings record
    ///
    /// Fails soft: a store error leaves both sets empty and logs a
    /// warning. A missing or malformed record is the store's concern and
    /// already loads as the empty default.
    pub fn load(&mut self) {
        let settings = match self.store.load() {
            Ok(settings) => settings,
            Err(err) => {
                warn!(error = %err, "failed to load lockdown settings, treating as empty");
                LockdownSettings::default()
            }
        };

        self.raw_locked = settings.locked_ids.into_iter().collect();
        self.raw_protected = settings.protected_ids.into_iter().collect();

        debug!(
            locked = self.raw_locked.len(),
            protected = self.raw_protected.len(),
            "loaded lockdown settings"
        );
    }

    /// Effective set of locked item ids
    pub fn locked_ids(&self) -> HashSet<ItemId> {
        self.extensions.effective_locked_ids(self.raw_locked.clone())
    }

    /// Effective set of protected item ids
    pub fn protected_ids(&self) -> HashSet<ItemId> {
        self.extensions
            .effective_protected_ids(self.raw_protected.clone())
    }

    /// Union of both effective sets, for picker pre-population
    pub fn restricted_ids(&self) -> HashSet<ItemId> {
        let mut ids = self.locked_ids();
        ids.extend(self.protected_ids());
        ids
    }

    /// Whether the item is in the effective locked set
    pub fn is_locked(&self, id: ItemId) -> bool {
        self.locked_ids().contains(&id)
    }

    /// Whether the item is in the effective protected set
    pub fn is_protected(&self, id: ItemId) -> bool {
        self.protected_ids().contains(&id)
    }

    /// Whether any restriction is configured at all
    ///
    /// The fast bypass: when false, the gate and guard return their inputs
    /// unchanged without further set lookups.
    pub fn has_any(&self) -> bool {
        !self.locked_ids().is_empty() || !self.protected_ids().is_empty()
    }

    /// Remove a permanently deleted item from both raw sets and persist
    ///
    /// The in-memory prune happens before the write, so the current
    /// instance is consistent even if persistence fails.
    ///
    /// # Errors
    ///
    /// Returns `LockdownError::Persistence` if the pruned record cannot be
    /// written back to the store.
    pub fn on_item_deleted(&mut self, id: ItemId) -> Result<()> {
        let removed = self.raw_locked.remove(&id) | self.raw_protected.remove(&id);

        if removed {
            debug!(item = %id, "pruned deleted item from lockdown settings");
        }

        self.store.save(&self.settings_snapshot())
    }

    /// The host's extension points
    pub fn extensions(&self) -> &E {
        &self.extensions
    }

    /// The underlying settings store
    ///
    /// Administrator saves go through the same store the registry reads
    /// from; reload the registry afterwards to pick them up.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn settings_snapshot(&self) -> LockdownSettings {
        let mut locked: Vec<ItemId> = self.raw_locked.iter().copied().collect();
        let mut protected: Vec<ItemId> = self.raw_protected.iter().copied().collect();
        // Stable order keeps the persisted record deterministic.
        locked.sort();
        protected.sort();

        LockdownSettings {
            locked_ids: locked,
            protected_ids: protected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extensions::DefaultExtensions;
    use crate::settings::InMemorySettingsStore;

    fn seeded_registry(
        locked: &[u64],
        protected: &[u64],
    ) -> ItemIdRegistry<InMemorySettingsStore, DefaultExtensions> {
        let store = InMemorySettingsStore::with_settings(LockdownSettings {
            locked_ids: locked.iter().copied().map(ItemId).collect(),
            protected_ids: protected.iter().copied().map(ItemId).collect(),
        });
        let mut registry = ItemIdRegistry::new(store, DefaultExtensions);
        registry.load();
        registry
    }

    #[test]
    fn test_load_populates_both_sets() {
        let registry = seeded_registry(&[7], &[42, 43]);

        assert!(registry.is_locked(ItemId(7)));
        assert!(registry.is_protected(ItemId(42)));
        assert!(registry.is_protected(ItemId(43)));
        assert!(!registry.is_protected(ItemId(7)));
        assert!(registry.has_any());
    }

    #[test]
    fn test_empty_registry_has_none() {
        let registry = seeded_registry(&[], &[]);
        assert!(!registry.has_any());
        assert!(!registry.is_locked(ItemId(1)));
        assert!(!registry.is_protected(ItemId(1)));
    }

    #[test]
    fn test_id_may_appear_in_both_sets() {
        let registry = seeded_registry(&[5], &[5]);
        assert!(registry.is_locked(ItemId(5)));
        assert!(registry.is_protected(ItemId(5)));
    }

    #[test]
    fn test_restricted_ids_is_union() {
        let registry = seeded_registry(&[1, 2], &[2, 3]);
        let ids = registry.restricted_ids();
        assert_eq!(ids.len(), 3);
        assert!(ids.contains(&ItemId(1)));
        assert!(ids.contains(&ItemId(3)));
    }

    #[test]
    fn test_extension_can_extend_effective_set() {
        struct ExtraLock;
        impl HostExtensions for ExtraLock {
            fn effective_locked_ids(&self, mut raw: HashSet<ItemId>) -> HashSet<ItemId> {
                raw.insert(ItemId(99));
                raw
            }
        }

        let mut registry = ItemIdRegistry::new(InMemorySettingsStore::new(), ExtraLock);
        registry.load();

        // Not persisted, but effective for every check on this instance.
        assert!(registry.is_locked(ItemId(99)));
        assert!(registry.has_any());
    }
}
