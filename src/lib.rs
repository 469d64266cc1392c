//! # ShiftShift - Driver Shift Time Tracking
//!
//! A command-line utility for drivers to track work sessions, breaks and
//! expenses, and to generate time and earnings reports.
//!
//! ## Features
//!
//! - **Session Tracking**: Start and end work sessions, adjust recorded times
//! - **Break Accounting**: Track breaks within a session with manual corrections
//! - **Notes and Tasks**: Free-text notes and a per-session task checklist
//! - **Expense Tracking**: Tolls, meals, fuel and other expenses
//! - **Summaries**: Weekly and monthly worked time with gross/net earnings
//! - **Data Export**: Printable reports plus CSV, JSON, and Excel exports
//! - **Cloud Push**: Optional upload of local records to a remote store
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftshift::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
