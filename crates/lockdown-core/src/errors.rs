use thiserror::Error;

/// Result type alias using LockdownError
pub type Result<T> = std::result::Result<T, LockdownError>;

/// Error taxonomy for lockdown operations
///
/// Capability and guard decisions are total functions and never fail; the
/// only fallible operations are reads and writes against the settings
/// store, so the taxonomy stays small.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LockdownError {
    /// Settings store read or write failed
    #[error("Settings persistence failed during {op}: {message}")]
    Persistence { op: String, message: String },

    /// Settings record could not be encoded or decoded
    #[error("Settings serialization failed: {message}")]
    Serialization { message: String },
}

impl LockdownError {
    /// Create a persistence error with operation context
    pub fn persistence(op: impl Into<String>, message: impl Into<String>) -> Self {
        LockdownError::Persistence {
            op: op.into(),
            message: message.into(),
        }
    }
}

/// Conversion from serde_json::Error to LockdownError
impl From<serde_json::Error> for LockdownError {
    fn from(err: serde_json::Error) -> Self {
        LockdownError::Serialization {
            message: err.to_string(),
        }
    }
}
