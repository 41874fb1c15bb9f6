//! Error taxonomy for the attendance pipeline.
//!
//! Every component returns its error to the direct caller; only the CLI
//! entry point decides which phase is fatal and which is merely logged.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttlogError {
    /// Configuration file missing, unparsable, or failing validation.
    #[error("failed to load configuration from {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    /// SSID probe failed: unsupported platform, OS command failure,
    /// or no identifier found in the command output.
    #[error("network probe failed: {0}")]
    Probe(String),

    /// The database could not be opened or the schema could not be created.
    #[error("failed to initialize attendance database: {0}")]
    StorageInit(#[source] rusqlite::Error),

    /// A read against the attendance table failed.
    #[error("attendance lookup failed: {0}")]
    StorageQuery(#[source] rusqlite::Error),

    /// An insert failed for a reason other than the (date, place)
    /// uniqueness constraint.
    #[error("attendance insert failed: {0}")]
    StorageWrite(#[source] rusqlite::Error),

    /// A side-effect command could not be started. Never escalated.
    #[error("failed to launch command '{command}': {source}")]
    CommandLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
