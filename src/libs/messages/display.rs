//! Display implementation for attlog application messages.
//!
//! All user-facing text is defined here, in one place, so that message
//! wording stays consistent and the call sites stay free of string literals.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === ATTENDANCE MESSAGES ===
            Message::AttendanceRecorded(place) => format!("Attendance recorded for {}", place),
            Message::AttendanceAlreadyRecorded(place) => format!("Attendance already recorded today for {}", place),
            Message::AttendanceRecordFailed(err) => format!("Failed to record attendance: {}", err),
            Message::NoMatchingNetwork(ssid) => format!("No place configured for network '{}'", ssid),

            // === PROBE MESSAGES ===
            Message::SsidDetected(ssid) => format!("Connected to network '{}'", ssid),
            Message::SsidProbeFailed(err) => format!("Could not determine the current network: {}", err),

            // === COMMAND MESSAGES ===
            Message::CommandLaunched(command) => format!("Attendance command launched: {}", command),
            Message::CommandLaunchFailed(command, err) => format!("Failed to launch attendance command '{}': {}", command, err),
            Message::CommandLineEmpty => "Skipping empty attendance command".to_string(),

            // === REPORT MESSAGES ===
            Message::MonthlyReportTitle(month) => format!("Attendance log for {}", month),
            Message::MonthlyReportTotal(count) => format!("Total attendance events: {}", count),

            // === GENERAL MESSAGES ===
            Message::Version(version) => format!("attlog version: {}", version),
        };
        write!(f, "{}", text)
    }
}
