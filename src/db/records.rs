//! SQLite implementation of the abstract record store.
//!
//! Stores each record as a whole JSON payload keyed by id, one table per
//! collection. Updates are upserts: a record whose earlier create failed
//! (local-first writes are never retried) is silently materialized by the
//! next whole-object write.

use crate::db::db::Db;
use crate::libs::persist::{Collection, RecordStore};
use anyhow::Result;
use rusqlite::params;
use serde_json::Value;

pub struct SqliteStore {
    db: Db,
}

impl SqliteStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

impl RecordStore for SqliteStore {
    fn create_record(&mut self, collection: Collection, id: i64, record: &Value) -> Result<()> {
        self.db.conn.execute(
            &format!("INSERT INTO {} (id, payload) VALUES (?1, ?2)", collection.table()),
            params![id, record.to_string()],
        )?;
        Ok(())
    }

    fn update_record(&mut self, collection: Collection, id: i64, record: &Value) -> Result<()> {
        self.db.conn.execute(
            &format!("INSERT OR REPLACE INTO {} (id, payload) VALUES (?1, ?2)", collection.table()),
            params![id, record.to_string()],
        )?;
        Ok(())
    }

    fn delete_record(&mut self, collection: Collection, id: i64) -> Result<()> {
        self.db
            .conn
            .execute(&format!("DELETE FROM {} WHERE id = ?1", collection.table()), params![id])?;
        Ok(())
    }

    fn delete_all(&mut self, collection: Collection) -> Result<()> {
        self.db.conn.execute(&format!("DELETE FROM {}", collection.table()), [])?;
        Ok(())
    }

    fn list_records(&mut self, collection: Collection) -> Result<Vec<Value>> {
        let mut stmt = self
            .db
            .conn
            .prepare(&format!("SELECT payload FROM {} ORDER BY id", collection.table()))?;
        let record_iter = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut records = Vec::new();
        for payload in record_iter {
            records.push(serde_json::from_str(&payload?)?);
        }

        Ok(records)
    }
}
