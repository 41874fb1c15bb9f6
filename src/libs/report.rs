//! Monthly attendance report.
//!
//! Collects every attendance event within the calendar month containing a
//! reference date. The month is expressed as a half-open date range so the
//! range query in the store stays a plain string comparison.

use crate::db::attendance::{Attendance, AttendanceRecord};
use crate::libs::error::AttlogError;
use chrono::{Datelike, NaiveDate};

/// Attendance events for one calendar month, ordered by date.
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub records: Vec<AttendanceRecord>,
    /// Number of (day, place) events; a day with two places counts twice.
    pub count: usize,
}

impl MonthlyReport {
    /// Fetches the report for the month containing `reference`.
    pub fn build(store: &mut Attendance, reference: NaiveDate) -> Result<Self, AttlogError> {
        let (start, end) = month_bounds(reference);
        let records = store.fetch_range(start, end)?;
        let count = records.len();
        Ok(MonthlyReport { records, count })
    }
}

/// Returns the first day of `date`'s month and the first day of the
/// following month, handling the December to January rollover.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date.with_day(1).unwrap_or(date);
    let end = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    // Both bounds are day-1 dates and always representable.
    (start, end.unwrap_or(start))
}
