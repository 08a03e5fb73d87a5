#![allow(dead_code)]

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use lockdown_core::{
    DefaultExtensions, InMemorySettingsStore, ItemFields, ItemId, ItemIdRegistry, ItemStatus,
    LockdownSettings,
};

/// Fixed evaluation time shared by the scenario tests
pub fn eval_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Registry seeded with the given locked and protected ids, already loaded
pub fn registry_with(
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

/// Build a grant map from (capability, granted) pairs
pub fn grants(pairs: &[(&str, bool)]) -> HashMap<String, bool> {
    pairs
        .iter()
        .map(|(name, granted)| (name.to_string(), *granted))
        .collect()
}

/// Grant map for a principal holding the default bypass capability
pub fn bypass_grants() -> HashMap<String, bool> {
    grants(&[("manage_settings", true)])
}

/// Item fields with an explicit status, password and normalized date
pub fn fields_at(status: ItemStatus, password: &str, date_utc: DateTime<Utc>) -> ItemFields {
    ItemFields {
        status,
        password: password.to_string(),
        date: date_utc.naive_utc(),
        date_utc,
    }
}

/// Currently persisted fields of a published item dated in the past
pub fn published_fields(password: &str) -> ItemFields {
    fields_at(
        ItemStatus::Publish,
        password,
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap(),
    )
}
