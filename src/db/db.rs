use crate::libs::error::AttlogError;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "attlog.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new(path: &Path) -> Result<Db, AttlogError> {
        let conn: Connection = Connection::open(path).map_err(AttlogError::StorageInit)?;

        Ok(Db { conn })
    }
}
