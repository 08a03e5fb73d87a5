//! Host extension points
//!
//! Every place the engine's behaviour can be overridden by the host is a
//! pure mapping function on the [`HostExtensions`] trait, each with a
//! documented default. The host implements the trait once and injects it
//! into the registry; everything downstream resolves overrides through it.

use std::collections::{HashMap, HashSet};

use crate::capability::CapabilityKind;
use crate::model::ItemId;
use crate::search::SearchQuery;

/// Default capability name required to bypass all restrictions
pub const DEFAULT_BYPASS_CAPABILITY: &str = "manage_settings";

/// Item type kinds excluded from picker search results by default
pub const DEFAULT_EXCLUDED_KINDS: &[&str] = &["menu_item", "revision"];

/// Additional kinds excluded when a commerce extension is present
pub const COMMERCE_EXCLUDED_KINDS: &[&str] = &["product_variation", "shop_order", "shop_coupon"];

/// The capability names the gate recognizes by default
pub fn default_capability_map() -> HashMap<String, CapabilityKind> {
    HashMap::from([
        ("edit_item".to_string(), CapabilityKind::Edit),
        ("delete_item".to_string(), CapabilityKind::Delete),
    ])
}

/// Overridable pure mapping functions for the host
///
/// Defaults are identity transforms (or the documented constant), so a
/// host with no customizations can inject [`DefaultExtensions`].
///
/// # Example
/// ```
/// use lockdown_core::extensions::{DefaultExtensions, HostExtensions};
///
/// let ext = DefaultExtensions;
/// assert_eq!(ext.bypass_capability(), "manage_settings");
/// ```
pub trait HostExtensions {
    /// Transform the raw locked-id set into the effective one
    fn effective_locked_ids(&self, raw: HashSet<ItemId>) -> HashSet<ItemId> {
        raw
    }

    /// Transform the raw protected-id set into the effective one
    fn effective_protected_ids(&self, raw: HashSet<ItemId>) -> HashSet<ItemId> {
        raw
    }

    /// Resolve the capability name that bypasses all restrictions
    ///
    /// The same resolved name gates capability checks, update guarding and
    /// administration of the restricted-id lists themselves.
    fn bypass_capability(&self) -> String {
        DEFAULT_BYPASS_CAPABILITY.to_string()
    }

    /// Transform the map of capability names the gate recognizes
    fn recognized_capabilities(
        &self,
        defaults: HashMap<String, CapabilityKind>,
    ) -> HashMap<String, CapabilityKind> {
        defaults
    }

    /// Transform the list of item kinds excluded from picker searches
    fn excluded_item_kinds(&self, defaults: Vec<String>) -> Vec<String> {
        defaults
    }

    /// Transform the fully built search query before it is executed
    fn search_defaults(&self, query: SearchQuery) -> SearchQuery {
        query
    }
}

/// Identity implementation of every extension point
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExtensions;

impl HostExtensions for DefaultExtensions {}
