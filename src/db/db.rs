use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "shiftshift.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the application database and brings the schema up to date.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)?;

        migrations::apply(&mut conn)?;

        Ok(Db { conn })
    }
}
