//! Versioned schema migrations.
//!
//! Each migration runs inside its own transaction and is recorded in the
//! migrations table, so the schema evolves exactly once per version
//! regardless of how often the database is opened.

use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// Tracks which schema versions have been applied.
const MIGRATIONS_TABLE: &str = "CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const SELECT_VERSION: &str = "SELECT COALESCE(MAX(version), 0) FROM migrations";
const INSERT_MIGRATION: &str = "INSERT INTO migrations (version, name) VALUES (?1, ?2)";

/// A single schema change with its version and transformation.
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// All migrations in chronological order.
fn registry() -> Vec<Migration> {
    vec![Migration {
        version: 1,
        name: "create_record_tables",
        up: |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS sessions (
                    id INTEGER NOT NULL PRIMARY KEY,
                    payload TEXT NOT NULL
                )",
                [],
            )?;
            tx.execute(
                "CREATE TABLE IF NOT EXISTS expenses (
                    id INTEGER NOT NULL PRIMARY KEY,
                    payload TEXT NOT NULL
                )",
                [],
            )?;
            Ok(())
        },
    }]
}

/// Applies all pending migrations.
pub fn apply(conn: &mut Connection) -> Result<()> {
    conn.execute(MIGRATIONS_TABLE, [])?;
    let current = version(conn)?;

    for migration in registry() {
        if migration.version <= current {
            continue;
        }
        let tx = conn.transaction()?;
        (migration.up)(&tx)?;
        tx.execute(INSERT_MIGRATION, params![migration.version, migration.name])?;
        tx.commit()?;
        msg_debug!(format!("applied migration {} ({})", migration.version, migration.name));
    }

    Ok(())
}

/// The highest applied schema version.
pub fn version(conn: &Connection) -> Result<u32> {
    let version = conn.query_row(SELECT_VERSION, [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
