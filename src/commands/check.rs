//! Monthly attendance report command.
//!
//! Bypasses configuration and the network probe entirely: opens the store,
//! fetches every event in the current calendar month, and prints them with
//! a total. Storage failures here are fatal.

use crate::db::attendance::Attendance;
use crate::libs::context::AppContext;
use crate::libs::report::MonthlyReport;
use crate::libs::view::View;
use anyhow::Result;
use chrono::Local;

pub fn cmd(ctx: &AppContext) -> Result<()> {
    let now = Local::now().date_naive();
    let mut attendance = Attendance::new(&ctx.db_path)?;

    let report = MonthlyReport::build(&mut attendance, now)?;
    View::monthly(&report, &now.format("%B, %Y").to_string());

    Ok(())
}
