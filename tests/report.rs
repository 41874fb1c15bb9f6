#[cfg(test)]
mod tests {
    use attlog::db::attendance::Attendance;
    use attlog::libs::report::{month_bounds, MonthlyReport};
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds_mid_year() {
        assert_eq!(month_bounds(date(2025, 6, 17)), (date(2025, 6, 1), date(2025, 7, 1)));
    }

    #[test]
    fn test_month_bounds_december_rollover() {
        assert_eq!(month_bounds(date(2025, 12, 31)), (date(2025, 12, 1), date(2026, 1, 1)));
    }

    #[test]
    fn test_month_bounds_leap_february() {
        assert_eq!(month_bounds(date(2024, 2, 29)), (date(2024, 2, 1), date(2024, 3, 1)));
        assert_eq!(month_bounds(date(2025, 2, 14)), (date(2025, 2, 1), date(2025, 3, 1)));
    }

    struct ReportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ReportTestContext {
        fn setup() -> Self {
            ReportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ReportTestContext {
        fn store(&self) -> Attendance {
            Attendance::new(&self.temp_dir.path().join("attlog.db")).unwrap()
        }
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_report_includes_only_reference_month(ctx: &mut ReportTestContext) {
        let mut attendance = ctx.store();
        attendance.record_if_absent(date(2025, 1, 31), "Office").unwrap();
        attendance.record_if_absent(date(2025, 2, 1), "Office").unwrap();

        let report = MonthlyReport::build(&mut attendance, date(2025, 1, 15)).unwrap();
        assert_eq!(report.count, 1);
        assert_eq!(report.records[0].date, date(2025, 1, 31));
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_report_december_boundary(ctx: &mut ReportTestContext) {
        let mut attendance = ctx.store();
        attendance.record_if_absent(date(2025, 12, 31), "Office").unwrap();
        attendance.record_if_absent(date(2026, 1, 1), "Office").unwrap();

        let december = MonthlyReport::build(&mut attendance, date(2025, 12, 10)).unwrap();
        assert_eq!(december.count, 1);
        assert_eq!(december.records[0].date, date(2025, 12, 31));

        let january = MonthlyReport::build(&mut attendance, date(2026, 1, 20)).unwrap();
        assert_eq!(january.count, 1);
        assert_eq!(january.records[0].date, date(2026, 1, 1));
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_report_leap_february_boundary(ctx: &mut ReportTestContext) {
        let mut attendance = ctx.store();
        attendance.record_if_absent(date(2024, 2, 29), "Office").unwrap();
        attendance.record_if_absent(date(2024, 3, 1), "Office").unwrap();

        let report = MonthlyReport::build(&mut attendance, date(2024, 2, 5)).unwrap();
        assert_eq!(report.count, 1);
        assert_eq!(report.records[0].date, date(2024, 2, 29));
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_report_counts_one_event_per_day_and_place(ctx: &mut ReportTestContext) {
        let mut attendance = ctx.store();
        // Two places on the same day count as two events.
        attendance.record_if_absent(date(2025, 6, 2), "Home").unwrap();
        attendance.record_if_absent(date(2025, 6, 2), "Office").unwrap();
        attendance.record_if_absent(date(2025, 6, 3), "Office").unwrap();

        let report = MonthlyReport::build(&mut attendance, date(2025, 6, 15)).unwrap();
        assert_eq!(report.count, 3);
        assert_eq!(report.records.len(), report.count);
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_report_empty_month(ctx: &mut ReportTestContext) {
        let mut attendance = ctx.store();
        let report = MonthlyReport::build(&mut attendance, date(2025, 6, 15)).unwrap();
        assert_eq!(report.count, 0);
        assert!(report.records.is_empty());
    }
}
