use crate::db::db::Db;
use crate::libs::error::AttlogError;
use chrono::NaiveDate;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::path::Path;

const SCHEMA_ATTENDANCE: &str = "CREATE TABLE IF NOT EXISTS attendance (
    id INTEGER PRIMARY KEY,
    date TEXT NOT NULL,
    place TEXT NOT NULL
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_attendance_date_place ON attendance (date, place);";
const INSERT_ATTENDANCE: &str = "INSERT INTO attendance (date, place) VALUES (?1, ?2)";
const SELECT_BY_DATE_PLACE: &str = "SELECT id FROM attendance WHERE date = ?1 AND place = ?2";
const SELECT_RANGE: &str = "SELECT id, date, place FROM attendance WHERE date >= ?1 AND date < ?2 ORDER BY date";

/// One attendance event. Append-only: never updated, never deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub place: String,
}

pub struct Attendance {
    conn: Connection,
}

impl Attendance {
    /// Opens the database at `path` and ensures the attendance table and
    /// its unique (date, place) index exist. Safe to call on every start.
    pub fn new(path: &Path) -> Result<Self, AttlogError> {
        let db = Db::new(path)?;
        db.conn.execute_batch(SCHEMA_ATTENDANCE).map_err(AttlogError::StorageInit)?;
        Ok(Attendance { conn: db.conn })
    }

    /// Inserts a record for (date, place) unless one already exists.
    ///
    /// Returns `true` when a new record was created. The check-then-insert
    /// leans on the unique index as its atomicity unit: if the insert hits
    /// the constraint despite the check, the record is treated as already
    /// present rather than as an error.
    pub fn record_if_absent(&mut self, date: NaiveDate, place: &str) -> Result<bool, AttlogError> {
        let date_str = date.format("%Y-%m-%d").to_string();

        let existing = self
            .conn
            .query_row(SELECT_BY_DATE_PLACE, params![date_str, place], |row| row.get::<_, i64>(0))
            .optional()
            .map_err(AttlogError::StorageQuery)?;
        if existing.is_some() {
            return Ok(false);
        }

        match self.conn.execute(INSERT_ATTENDANCE, params![date_str, place]) {
            Ok(_) => Ok(true),
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => Ok(false),
            Err(e) => Err(AttlogError::StorageWrite(e)),
        }
    }

    /// Returns all records with `start <= date < end`, ascending by date.
    pub fn fetch_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<Vec<AttendanceRecord>, AttlogError> {
        let start_str = start.format("%Y-%m-%d").to_string();
        let end_str = end.format("%Y-%m-%d").to_string();

        let mut stmt = self.conn.prepare(SELECT_RANGE).map_err(AttlogError::StorageQuery)?;
        let record_iter = stmt
            .query_map(params![start_str, end_str], |row| {
                Ok(AttendanceRecord {
                    id: row.get(0)?,
                    date: row.get(1)?,
                    place: row.get(2)?,
                })
            })
            .map_err(AttlogError::StorageQuery)?;

        let mut records = Vec::new();
        for record in record_iter {
            records.push(record.map_err(AttlogError::StorageQuery)?);
        }
        Ok(records)
    }
}
