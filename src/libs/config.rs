//! Configuration management for the attlog application.
//!
//! The configuration is a small YAML document mapping wireless networks to
//! place names, plus an optional list of commands to launch whenever a new
//! attendance event is recorded:
//!
//! ```yaml
//! entries:
//!   - ssid: HOME-5G
//!     place: Home
//!   - ssid: ACME-CORP
//!     place: Office
//! post_attendance_commands:
//!   - notify-send "Attendance recorded"
//! ```
//!
//! Entries are matched in order against the probed SSID; the first exact,
//! case-sensitive match wins. Both fields of every entry must be non-empty.
//! A missing or malformed configuration file is a fatal error: without
//! entries the tool has nothing to do.

use crate::libs::error::AttlogError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// A single (network, place) mapping.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConfigEntry {
    /// Wireless network identifier, compared case-sensitively.
    pub ssid: String,
    /// Free-text place label recorded for matching days.
    pub place: String,
}

/// Root configuration document.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Ordered (ssid, place) mappings; first match wins.
    #[serde(default)]
    pub entries: Vec<ConfigEntry>,

    /// Shell command lines launched, fire-and-forget, after a new
    /// attendance event. Each line is split on whitespace; the commands
    /// come from local user configuration and are trusted as-is.
    #[serde(default)]
    pub post_attendance_commands: Vec<String>,
}

impl Config {
    /// Reads and validates the configuration file at `path`.
    pub fn read(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path).map_err(|e| AttlogError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: Config = serde_yaml::from_str(&raw).map_err(|e| AttlogError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    /// Writes the configuration to `path` as YAML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Returns the place of the first entry whose SSID equals `ssid`.
    pub fn match_place(&self, ssid: &str) -> Option<&str> {
        self.entries.iter().find(|entry| entry.ssid == ssid).map(|entry| entry.place.as_str())
    }

    fn validate(&self, path: &Path) -> Result<(), AttlogError> {
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.ssid.is_empty() || entry.place.is_empty() {
                return Err(AttlogError::Config {
                    path: path.to_path_buf(),
                    reason: format!("entry {} has an empty ssid or place", index + 1),
                });
            }
        }
        Ok(())
    }
}
