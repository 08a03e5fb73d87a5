//! SQLite-backed settings store

use lockdown_core::{LockdownSettings, SettingsStore};
use rusqlite::{Connection, OptionalExtension};
use tracing::warn;

use crate::errors::{from_rusqlite, Result};

/// Name of the options row holding the lockdown settings
pub const SETTINGS_RECORD: &str = "content_lockdown";

/// Settings store backed by a single options row
///
/// Owns its connection; the registry owns the store. Call
/// [`crate::schema::init_schema`] on the connection before constructing
/// one.
pub struct SqliteSettingsStore {
    conn: Connection,
    record: String,
}

impl SqliteSettingsStore {
    /// Create a store reading and writing the default settings record
    pub fn new(conn: Connection) -> Self {
        Self::with_record(conn, SETTINGS_RECORD)
    }

    /// Create a store using a custom record name
    pub fn with_record(conn: Connection, record: impl Into<String>) -> Self {
        Self {
            conn,
            record: record.into(),
        }
    }

    /// Remove the persisted record entirely (uninstall cleanup)
    ///
    /// # Errors
    ///
    /// Returns `LockdownError::Persistence` if the delete fails.
    pub fn delete(&self) -> Result<()> {
        self.conn
            .execute("DELETE FROM options WHERE name = ?1", [&self.record])
            .map_err(|e| from_rusqlite("delete_settings", e))?;

        Ok(())
    }
}

impl SettingsStore for SqliteSettingsStore {
    fn load(&self) -> Result<LockdownSettings> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload_json FROM options WHERE name = ?1",
                [&self.record],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| from_rusqlite("load_settings", e))?;

        let Some(payload) = payload else {
            return Ok(LockdownSettings::default());
        };

        // A malformed payload is a soft failure: restrictions load as
        // empty rather than taking the host down.
        match serde_json::from_str(&payload) {
            Ok(settings) => Ok(settings),
            Err(err) => {
                warn!(record = %self.record, error = %err, "malformed lockdown settings payload, treating as empty");
                Ok(LockdownSettings::default())
            }
        }
    }

    fn save(&self, settings: &LockdownSettings) -> Result<()> {
        let payload = serde_json::to_string(settings)?;

        self.conn
            .execute(
                "INSERT INTO options (name, payload_json) VALUES (?1, ?2)
                 ON CONFLICT(name) DO UPDATE SET payload_json = excluded.payload_json",
                rusqlite::params![self.record, payload],
            )
            .map_err(|e| from_rusqlite("save_settings", e))?;

        Ok(())
    }
}
