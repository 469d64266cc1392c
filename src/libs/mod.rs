//! Core library modules for the shiftshift application.
//!
//! Contains the session store and its supporting types, the aggregation
//! engine, report and export builders, configuration management, and the
//! messaging system used for all user-facing output.

/// Injectable time source used by every store mutation.
pub mod clock;

/// Application configuration persisted as JSON in the platform data directory.
pub mod config;

/// Platform-specific application data directory resolution.
pub mod data_storage;

/// Expense records and their typed edit patch.
pub mod expense;

/// Session export in CSV, JSON and Excel formats.
pub mod export;

/// Duration and timestamp formatting helpers.
pub mod formatter;

/// Centralized user-facing message definitions and display macros.
pub mod messages;

/// Abstract record store interface backing session and expense persistence.
pub mod persist;

/// Printable work report rendering.
pub mod report;

/// Session, break interval and checklist task models.
pub mod session;

/// The session store: canonical in-memory state and its mutators.
pub mod store;

/// Pure aggregation over session collections: windows, totals, earnings.
pub mod summary;

/// Terminal table views for sessions, tasks, expenses and totals.
pub mod view;
