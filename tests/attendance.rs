#[cfg(test)]
mod tests {
    use attlog::db::attendance::Attendance;
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct AttendanceTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for AttendanceTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            AttendanceTestContext { temp_dir }
        }
    }

    impl AttendanceTestContext {
        fn store(&self) -> Attendance {
            Attendance::new(&self.temp_dir.path().join("attlog.db")).unwrap()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_record_if_absent_inserts_once(ctx: &mut AttendanceTestContext) {
        let mut attendance = ctx.store();
        let day = date(2025, 6, 2);

        assert!(attendance.record_if_absent(day, "Office").unwrap());
        assert!(!attendance.record_if_absent(day, "Office").unwrap());

        let records = attendance.fetch_range(day, date(2025, 6, 3)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, day);
        assert_eq!(records[0].place, "Office");
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_distinct_places_same_date(ctx: &mut AttendanceTestContext) {
        let mut attendance = ctx.store();
        let day = date(2025, 6, 2);

        assert!(attendance.record_if_absent(day, "Home").unwrap());
        assert!(attendance.record_if_absent(day, "Office").unwrap());

        let records = attendance.fetch_range(day, date(2025, 6, 3)).unwrap();
        assert_eq!(records.len(), 2);
        let places: Vec<&str> = records.iter().map(|r| r.place.as_str()).collect();
        assert!(places.contains(&"Home"));
        assert!(places.contains(&"Office"));
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_same_place_distinct_dates(ctx: &mut AttendanceTestContext) {
        let mut attendance = ctx.store();

        assert!(attendance.record_if_absent(date(2025, 6, 2), "Office").unwrap());
        assert!(attendance.record_if_absent(date(2025, 6, 3), "Office").unwrap());

        let records = attendance.fetch_range(date(2025, 6, 1), date(2025, 7, 1)).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_fetch_range_ordered_and_half_open(ctx: &mut AttendanceTestContext) {
        let mut attendance = ctx.store();

        attendance.record_if_absent(date(2025, 6, 15), "Office").unwrap();
        attendance.record_if_absent(date(2025, 6, 1), "Office").unwrap();
        attendance.record_if_absent(date(2025, 6, 30), "Office").unwrap();
        attendance.record_if_absent(date(2025, 7, 1), "Office").unwrap();

        let records = attendance.fetch_range(date(2025, 6, 1), date(2025, 7, 1)).unwrap();
        let dates: Vec<_> = records.iter().map(|r| r.date).collect();
        // Start inclusive, end exclusive, ascending.
        assert_eq!(dates, vec![date(2025, 6, 1), date(2025, 6, 15), date(2025, 6, 30)]);
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_fetch_range_empty_store(ctx: &mut AttendanceTestContext) {
        let mut attendance = ctx.store();
        let records = attendance.fetch_range(date(2025, 1, 1), date(2026, 1, 1)).unwrap();
        assert!(records.is_empty());
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_schema_init_is_idempotent(ctx: &mut AttendanceTestContext) {
        let path = ctx.temp_dir.path().join("attlog.db");
        let mut first = Attendance::new(&path).unwrap();
        first.record_if_absent(date(2025, 6, 2), "Office").unwrap();
        drop(first);

        // Reopening must keep existing data and the unique index intact.
        let mut second = Attendance::new(&path).unwrap();
        assert!(!second.record_if_absent(date(2025, 6, 2), "Office").unwrap());
        let records = second.fetch_range(date(2025, 6, 1), date(2025, 7, 1)).unwrap();
        assert_eq!(records.len(), 1);
    }
}
