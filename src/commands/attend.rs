//! Default attendance cycle.
//!
//! Loads the configuration, opens the attendance store, probes the current
//! wireless network, and records one attendance event for the matching
//! place and the current day. Side-effect commands fire only when a new
//! record was actually created.
//!
//! Failure policy follows the phase that failed: configuration and store
//! initialization are fatal, a probe failure ends the run quietly (no
//! attendance is possible without a network), and a storage error during
//! recording is logged without crashing the process. External scheduling
//! of the tool is the implicit retry mechanism; nothing is retried here.

use crate::db::attendance::Attendance;
use crate::libs::config::Config;
use crate::libs::context::AppContext;
use crate::libs::messages::Message;
use crate::libs::probe::Platform;
use crate::libs::runner::run_attendance_commands;
use crate::{msg_debug, msg_error, msg_info, msg_success, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDate};

/// Result of one attendance-check cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new record was inserted; side-effect commands have been launched.
    Recorded,
    /// A record for (today, place) already existed; nothing was changed.
    AlreadyRecorded,
    /// No configured entry matched the probed SSID.
    NoMatch,
}

pub fn cmd(ctx: &AppContext) -> Result<()> {
    let config = Config::read(&ctx.config_path)?;
    let mut attendance = Attendance::new(&ctx.db_path)?;

    let ssid = match Platform::detect().and_then(|platform| platform.current_ssid()) {
        Ok(ssid) => ssid,
        Err(e) => {
            msg_warning!(Message::SsidProbeFailed(e.to_string()));
            return Ok(());
        }
    };
    msg_debug!(Message::SsidDetected(ssid.clone()));

    // Resolved once so the cycle cannot straddle midnight.
    let today = Local::now().date_naive();

    match run_for_ssid(&mut attendance, &config, today, &ssid) {
        Ok(Outcome::Recorded) => {}
        Ok(Outcome::AlreadyRecorded) => {}
        Ok(Outcome::NoMatch) => msg_debug!(Message::NoMatchingNetwork(ssid)),
        Err(e) => msg_error!(Message::AttendanceRecordFailed(e.to_string())),
    }

    Ok(())
}

/// Runs one attendance-check cycle for an already-probed SSID.
///
/// The first configuration entry whose SSID equals `ssid` selects the
/// place; remaining entries are ignored even if they would also match.
pub fn run_for_ssid(attendance: &mut Attendance, config: &Config, today: NaiveDate, ssid: &str) -> Result<Outcome> {
    let place = match config.match_place(ssid) {
        Some(place) => place,
        None => return Ok(Outcome::NoMatch),
    };

    if attendance.record_if_absent(today, place)? {
        msg_success!(Message::AttendanceRecorded(place.to_string()));
        run_attendance_commands(&config.post_attendance_commands);
        Ok(Outcome::Recorded)
    } else {
        msg_info!(Message::AttendanceAlreadyRecorded(place.to_string()));
        Ok(Outcome::AlreadyRecorded)
    }
}
