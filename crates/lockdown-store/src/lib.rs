//! Lockdown Store - SQLite-backed settings persistence
//!
//! Default implementation of the `lockdown-core` settings boundary: the
//! restricted-id record lives as a single JSON payload row in an `options`
//! table. Reads fail soft (absent or malformed payloads load as the empty
//! default); writes replace the record wholesale, last writer wins.

pub mod db;
pub mod errors;
pub mod schema;
pub mod settings;

pub use settings::{SqliteSettingsStore, SETTINGS_RECORD};
