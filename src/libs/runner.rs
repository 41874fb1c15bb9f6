//! Fire-and-forget launcher for post-attendance commands.
//!
//! Commands come from local user configuration and are launched exactly as
//! written, split on whitespace, without a shell and without sandboxing.
//! Children are never waited on: the tool does not capture their output or
//! exit status, and a launch failure is logged without touching the
//! already-committed attendance record.

use crate::libs::error::AttlogError;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info};
use std::process::Command;

/// Launches every configured command in order, non-blocking.
pub fn run_attendance_commands(commands: &[String]) {
    for command in commands {
        match launch(command) {
            Ok(true) => msg_info!(Message::CommandLaunched(command.clone())),
            Ok(false) => msg_debug!(Message::CommandLineEmpty),
            Err(AttlogError::CommandLaunch { command, source }) => {
                msg_error!(Message::CommandLaunchFailed(command, source.to_string()))
            }
            Err(_) => {}
        }
    }
}

/// Spawns a single command line. Returns `Ok(false)` for blank lines.
fn launch(command: &str) -> Result<bool, AttlogError> {
    let mut parts = command.split_whitespace();
    let program = match parts.next() {
        Some(program) => program,
        None => return Ok(false),
    };

    Command::new(program).args(parts).spawn().map_err(|e| AttlogError::CommandLaunch {
        command: command.to_string(),
        source: e,
    })?;

    Ok(true)
}
