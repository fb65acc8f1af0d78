//! Error types for the StoryCraft core.

use thiserror::Error;

/// Error type for settings-store operations.
///
/// Controllers swallow these at their boundary (a failed write degrades to
/// in-memory state); the type exists so store implementations can report what
/// actually went wrong to the log.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading or writing the settings file failed
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file could not be encoded
    #[error("settings serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
