//! Bypass-capability resolution
//!
//! A single capability name exempts a principal from every restriction.
//! The name is resolved through the host's extension point so the same
//! value governs the capability gate, the mutation guard, and access to
//! the restricted-id settings themselves.

use std::collections::HashMap;

use crate::extensions::HostExtensions;

/// Resolve the bypass capability name
pub fn bypass_capability<E: HostExtensions>(extensions: &E) -> String {
    extensions.bypass_capability()
}

/// Whether the principal's granted capabilities include the bypass one
pub fn is_bypass<E: HostExtensions>(extensions: &E, granted: &HashMap<String, bool>) -> bool {
    granted
        .get(&extensions.bypass_capability())
        .copied()
        .unwrap_or(false)
}

/// Whether the principal may administer the restricted-id lists
///
/// Administration of the lists is guarded by the same capability that
/// bypasses the restrictions.
pub fn can_manage<E: HostExtensions>(extensions: &E, granted: &HashMap<String, bool>) -> bool {
    is_bypass(extensions, granted)
}
