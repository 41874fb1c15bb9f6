//! Per-invocation application context.
//!
//! The version string and the config and database paths travel in a single
//! struct built once at startup, instead of living in globals or constants.
//! CLI flags override the platform-default locations.

use crate::db::db::DB_FILE_NAME;
use crate::libs::config::CONFIG_FILE_NAME;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppContext {
    /// Version string reported by `--version`.
    pub version: String,
    /// Location of the YAML configuration file.
    pub config_path: PathBuf,
    /// Location of the SQLite attendance database.
    pub db_path: PathBuf,
}

impl AppContext {
    /// Builds the context for this invocation, resolving any path not given
    /// on the command line to the platform data directory.
    pub fn resolve(version: &str, config_path: Option<PathBuf>, db_path: Option<PathBuf>) -> Result<Self> {
        let storage = DataStorage::new();
        let config_path = match config_path {
            Some(path) => path,
            None => storage.get_path(CONFIG_FILE_NAME)?,
        };
        let db_path = match db_path {
            Some(path) => path,
            None => storage.get_path(DB_FILE_NAME)?,
        };

        Ok(AppContext {
            version: version.to_string(),
            config_path,
            db_path,
        })
    }
}
