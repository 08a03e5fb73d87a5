//! Options table schema

use rusqlite::Connection;

use crate::errors::{from_rusqlite, Result};

/// Create the options table if it does not exist
///
/// One row per named record; the lockdown settings use a single row keyed
/// by [`crate::SETTINGS_RECORD`]. Idempotent.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS options (
            name TEXT PRIMARY KEY,
            payload_json TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| from_rusqlite("init_schema", e))?;

    Ok(())
}
