//! # Attlog - WiFi Attendance Logger
//!
//! A command-line utility that records daily attendance at named places
//! based on the wireless network the machine is connected to.
//!
//! ## Features
//!
//! - **SSID Matching**: Maps the current WiFi network to a configured place
//! - **One Event Per Day**: At most one attendance record per (date, place)
//! - **Side-Effect Commands**: Launches user-configured commands on a new record
//! - **Monthly Report**: Lists and counts attendance events for the current month
//!
//! ## Usage
//!
//! ```rust,no_run
//! use attlog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
