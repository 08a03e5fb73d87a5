//! Capability gate
//!
//! Every capability check on the host is routed through
//! [`evaluate`], which overwrites the grant for the queried capability on
//! locked and protected items. The query is immutable; callers get an
//! amended copy of the grant map back.

use std::collections::HashMap;

use tracing::debug;

use crate::extensions::{default_capability_map, HostExtensions};
use crate::model::ItemId;
use crate::policy;
use crate::registry::ItemIdRegistry;
use crate::settings::SettingsStore;

/// How the gate treats a recognized capability
///
/// Lock membership denies every recognized kind; protect membership denies
/// only non-edit kinds, because protected items stay editable and their
/// edits are handled field-wise by the mutation guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityKind {
    /// Editing an item's content
    Edit,
    /// Trashing or permanently deleting an item
    Delete,
}

/// One capability check as produced by the host
///
/// Immutable; the decision is a pure function of the registry state at
/// query time.
#[derive(Debug, Clone, PartialEq)]
pub struct CapabilityQuery {
    /// The capability name being checked
    pub capability: String,
    /// The target item, when the check names one
    pub item: Option<ItemId>,
    /// The acting principal's effective capabilities so far
    pub granted: HashMap<String, bool>,
}

impl CapabilityQuery {
    /// Convenience constructor for a check against a specific item
    pub fn for_item(
        capability: impl Into<String>,
        item: ItemId,
        granted: HashMap<String, bool>,
    ) -> Self {
        Self {
            capability: capability.into(),
            item: Some(item),
            granted,
        }
    }
}

/// Evaluate a capability query against the registry
///
/// Returns the amended grant map. The map comes back unchanged when no
/// restriction applies:
/// - no restricted ids are configured at all
/// - the capability is not a recognized kind
/// - the principal holds the bypass capability
/// - the query names no target item
///
/// Otherwise the item's restriction is computed as `!locked` (and for
/// non-edit kinds additionally `!protected`), and the grant for the
/// queried capability is overwritten with `false` when the item is
/// restricted. An unrestricted item passes through unchanged: the gate
/// never upgrades a grant the host denied.
pub fn evaluate<S: SettingsStore, E: HostExtensions>(
    registry: &ItemIdRegistry<S, E>,
    query: &CapabilityQuery,
) -> HashMap<String, bool> {
    let mut granted = query.granted.clone();

    if !registry.has_any() {
        return granted;
    }

    let recognized = registry
        .extensions()
        .recognized_capabilities(default_capability_map());

    let Some(kind) = recognized.get(&query.capability) else {
        return granted;
    };

    if policy::is_bypass(registry.extensions(), &granted) {
        return granted;
    }

    let Some(item) = query.item else {
        return granted;
    };

    let mut allowed = !registry.is_locked(item);

    // Lock is checked for every recognized kind; protect only for non-edit.
    if allowed && *kind != CapabilityKind::Edit {
        allowed = !registry.is_protected(item);
    }

    // Only denials are written back: the gate restricts, it never grants
    // a capability the host already denied.
    if !allowed {
        debug!(item = %item, capability = %query.capability, "capability denied");
        granted.insert(query.capability.clone(), false);
    }

    granted
}
