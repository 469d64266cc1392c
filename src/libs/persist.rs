//! Abstract record store interface.
//!
//! The session store treats durable storage as an opaque collection of JSON
//! records. Implementations exist for the local SQLite database and for the
//! remote cloud store; the core never depends on either directly.
//!
//! Record ids are assigned by the caller before the adapter is consulted:
//! in-memory state is committed first and persistence follows, so a failing
//! adapter can never block or reorder local mutations.

use anyhow::Result;
use serde_json::Value;

/// The record collections the application persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Sessions,
    Expenses,
}

impl Collection {
    /// Storage table name for the collection.
    pub fn table(self) -> &'static str {
        match self {
            Collection::Sessions => "sessions",
            Collection::Expenses => "expenses",
        }
    }
}

/// Durable storage for whole-object records.
///
/// Every write replaces the complete record; adapters never see partial
/// field patches.
pub trait RecordStore {
    /// Stores a new record under the given id.
    fn create_record(&mut self, collection: Collection, id: i64, record: &Value) -> Result<()>;

    /// Replaces the record stored under the given id.
    fn update_record(&mut self, collection: Collection, id: i64, record: &Value) -> Result<()>;

    /// Removes the record with the given id. Removing an absent record is
    /// not an error.
    fn delete_record(&mut self, collection: Collection, id: i64) -> Result<()>;

    /// Removes every record in the collection.
    fn delete_all(&mut self, collection: Collection) -> Result<()>;

    /// Returns all records in the collection.
    fn list_records(&mut self, collection: Collection) -> Result<Vec<Value>>;
}
