//! Lockdown Core - access-decision and mutation-reversion engine
//!
//! This crate provides the decision engine that lets a content-management
//! host restrict a configured subset of items:
//! - Locked items cannot be edited, trashed or deleted by non-bypass users
//! - Protected items cannot be trashed or deleted, and status/password/
//!   future-date changes to published protected items are silently reverted
//! - Every rule is pure and request-scoped; the only I/O is behind the
//!   [`SettingsStore`] boundary
//!
//! The host routes its capability checks through [`capability::evaluate`]
//! and its pre-persistence updates through [`guard::guard`], both of which
//! consult an explicitly constructed [`ItemIdRegistry`].

pub mod capability;
pub mod errors;
pub mod extensions;
pub mod guard;
pub mod logging;
pub mod model;
pub mod notice;
pub mod policy;
pub mod registry;
pub mod search;
pub mod settings;

// Re-export commonly used types
pub use capability::{CapabilityKind, CapabilityQuery};
pub use errors::{LockdownError, Result};
pub use extensions::{DefaultExtensions, HostExtensions};
pub use guard::GuardOutcome;
pub use model::{ItemFields, ItemId, ItemStatus, ItemSummary, ProposedUpdate};
pub use registry::ItemIdRegistry;
pub use settings::{InMemorySettingsStore, LockdownSettings, SettingsStore};
