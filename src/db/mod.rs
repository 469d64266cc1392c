//! Database layer for the shiftshift application.
//!
//! Provides the SQLite-backed implementation of the record store interface.
//! Records are stored as whole JSON payloads keyed by id, one table per
//! collection, with the schema managed by a versioned migration runner.

/// Core database connection and initialization.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// SQLite implementation of the abstract record store.
pub mod records;
