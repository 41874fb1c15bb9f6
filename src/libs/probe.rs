//! Network identity probe.
//!
//! Asks the operating system which wireless network the machine is
//! currently associated with. Each platform has its own strategy, selected
//! once at startup by [`Platform::detect`]; the probe itself is a thin
//! wrapper around the respective OS tool and owns no state.
//!
//! Probe failures are never fatal: the caller logs them and ends the run
//! without recording anything.

use crate::libs::error::AttlogError;
use std::process::Command;

/// SSID lookup strategy for the current operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Macos,
    Windows,
}

impl Platform {
    /// Selects the probe strategy for the running platform.
    pub fn detect() -> Result<Self, AttlogError> {
        match std::env::consts::OS {
            "linux" => Ok(Platform::Linux),
            "macos" => Ok(Platform::Macos),
            "windows" => Ok(Platform::Windows),
            other => Err(AttlogError::Probe(format!("unsupported OS: {}", other))),
        }
    }

    /// Returns the SSID of the currently associated wireless network.
    pub fn current_ssid(&self) -> Result<String, AttlogError> {
        match self {
            Platform::Linux => {
                let output = run_probe_command("iwgetid", &["-r"])?;
                Ok(output.trim().to_string())
            }
            Platform::Macos => {
                // The awk filter extracts the SSID line from the interface summary.
                let script = "ipconfig getsummary en0 | awk -F ' SSID : ' '/ SSID : / {print $2}'";
                let output = run_probe_command("sh", &["-c", script])?;
                Ok(output.trim().to_string())
            }
            Platform::Windows => {
                let output = run_probe_command("netsh", &["wlan", "show", "interfaces"])?;
                parse_netsh_ssid(&output).ok_or_else(|| AttlogError::Probe("SSID not found in netsh output".to_string()))
            }
        }
    }
}

fn run_probe_command(program: &str, args: &[&str]) -> Result<String, AttlogError> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| AttlogError::Probe(format!("{} failed: {}", program, e)))?;
    if !output.status.success() {
        return Err(AttlogError::Probe(format!("{} exited with {}", program, output.status)));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Extracts the SSID value from `netsh wlan show interfaces` output.
///
/// The interface listing contains both an `SSID` and a `BSSID` line; only
/// the former names the network, so lines are matched on their leading
/// characters after trimming.
pub fn parse_netsh_ssid(output: &str) -> Option<String> {
    for line in output.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("SSID") {
            if let Some((_, value)) = trimmed.split_once(':') {
                return Some(value.trim().to_string());
            }
        }
    }
    None
}
