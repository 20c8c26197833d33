//! Trainer error types.
//!
//! Each variant maps to a distinct handling policy: association problems are
//! fatal at startup, a corrupt stats file is recoverable (the caller may fall
//! back to an empty store), and a failed flush must always reach the user.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the trainer engine.
#[derive(Debug, Error)]
pub enum TrainerError {
    /// The association source is missing, malformed, or incomplete.
    #[error("association data error: {0}")]
    DataLoad(String),

    /// The persisted stats file exists but could not be parsed.
    #[error("stats file {path} is corrupt: {reason}")]
    StatsLoad { path: PathBuf, reason: String },

    /// Flushing the stats store to disk failed.
    #[error("failed to save stats to {path}")]
    StatsSave {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A key outside the 00..=99 domain. Indicates a data-integrity bug
    /// rather than a user mistake.
    #[error("unknown key: {0:?}")]
    UnknownKey(String),
}

impl TrainerError {
    /// Returns `true` if the caller may continue with degraded state instead
    /// of aborting. Only a corrupt stats file qualifies: losing history is
    /// less harmful than refusing to run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TrainerError::StatsLoad { .. })
    }
}
