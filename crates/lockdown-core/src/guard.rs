//! Mutation guard
//!
//! Intercepts a proposed update to a protected item before persistence and
//! reverts state-altering field changes made by non-bypass principals.
//! Locked items never reach this stage: the capability gate already denies
//! their edit capability, so lock membership is not re-checked here.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::extensions::HostExtensions;
use crate::model::{ItemFields, ItemStatus, ProposedUpdate};
use crate::policy;
use crate::registry::ItemIdRegistry;
use crate::settings::SettingsStore;

/// A possibly-amended update plus the reversion flag
///
/// When `amended` is true the caller should append the notification marker
/// to its redirect target (see [`crate::notice::append_marker`]) so the
/// presentation layer can show a one-time notice.
#[derive(Debug, Clone, PartialEq)]
pub struct GuardOutcome {
    /// The update to persist, with reverted fields forced back to their
    /// prior values
    pub update: ProposedUpdate,
    /// Whether any field was reverted
    pub amended: bool,
}

impl GuardOutcome {
    fn unchanged(update: ProposedUpdate) -> Self {
        Self {
            update,
            amended: false,
        }
    }
}

/// Guard a proposed update against the registry
///
/// `current` is the item's currently persisted fields, or `None` when the
/// item cannot be loaded (pass-through: what cannot be verified cannot be
/// protected). `now` is the evaluation time for the future-date rule.
///
/// Reversion applies only when all of the following hold:
/// - the principal lacks the bypass capability
/// - some restriction is configured
/// - the target item is in the effective protected set
/// - the item is currently published
///
/// Field rules on a guarded update:
/// - a status other than published is forced back to the current status
/// - a changed password is forced back to the current password
/// - a changed date that is strictly in the future is forced back,
///   together with its normalized UTC timestamp; a date equal to `now`
///   counts as not future
///
/// Feeding an amended update back in yields `amended = false`.
pub fn guard<S: SettingsStore, E: HostExtensions>(
    registry: &ItemIdRegistry<S, E>,
    update: ProposedUpdate,
    current: Option<&ItemFields>,
    granted: &HashMap<String, bool>,
    now: DateTime<Utc>,
) -> GuardOutcome {
    if policy::is_bypass(registry.extensions(), granted) || !registry.has_any() {
        return GuardOutcome::unchanged(update);
    }

    if !registry.is_protected(update.id) {
        return GuardOutcome::unchanged(update);
    }

    let Some(current) = current else {
        return GuardOutcome::unchanged(update);
    };

    // Reversion only guards already-published protected content.
    if current.status != ItemStatus::Publish {
        return GuardOutcome::unchanged(update);
    }

    let mut update = update;
    let mut amended = false;

    if update.fields.status != ItemStatus::Publish {
        update.fields.status = current.status;
        amended = true;
    }

    if update.fields.password != current.password {
        update.fields.password = current.password.clone();
        amended = true;
    }

    if update.fields.date != current.date && update.fields.date_utc > now {
        update.fields.date = current.date;
        update.fields.date_utc = current.date_utc;
        amended = true;
    }

    if amended {
        info!(item = %update.id, "reverted update to protected published item");
    }

    GuardOutcome { update, amended }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extensions::DefaultExtensions;
    use crate::model::ItemId;
    use crate::settings::{InMemorySettingsStore, LockdownSettings};
    use chrono::TimeZone;

    fn protected_registry(
        id: u64,
    ) -> ItemIdRegistry<InMemorySettingsStore, DefaultExtensions> {
        let store = InMemorySettingsStore::with_settings(LockdownSettings {
            locked_ids: vec![],
            protected_ids: vec![ItemId(id)],
        });
        let mut registry = ItemIdRegistry::new(store, DefaultExtensions);
        registry.load();
        registry
    }

    fn fields(status: ItemStatus, password: &str, date_utc: DateTime<Utc>) -> ItemFields {
        ItemFields {
            status,
            password: password.to_string(),
            date: date_utc.naive_utc(),
            date_utc,
        }
    }

    #[test]
    fn test_date_equal_to_now_is_not_future() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let registry = protected_registry(42);
        let current = fields(ItemStatus::Publish, "", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        // Proposed date differs from current but equals the evaluation time.
        let update = ProposedUpdate {
            id: ItemId(42),
            fields: fields(ItemStatus::Publish, "", now),
        };

        let outcome = guard(&registry, update.clone(), Some(&current), &HashMap::new(), now);
        assert!(!outcome.amended);
        assert_eq!(outcome.update, update);
    }

    #[test]
    fn test_unloadable_item_passes_through() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let registry = protected_registry(42);
        let update = ProposedUpdate {
            id: ItemId(42),
            fields: fields(ItemStatus::Draft, "secret", now),
        };

        let outcome = guard(&registry, update.clone(), None, &HashMap::new(), now);
        assert!(!outcome.amended);
        assert_eq!(outcome.update, update);
    }
}
