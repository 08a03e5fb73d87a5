//! Error helpers for lockdown-store
//!
//! The store reuses the core error taxonomy; everything here maps SQLite
//! failures into it.

use lockdown_core::LockdownError;

/// Result type alias using the core error
pub type Result<T> = lockdown_core::Result<T>;

/// Create a persistence error from a rusqlite error
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> LockdownError {
    LockdownError::persistence(op, err.to_string())
}
