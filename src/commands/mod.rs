pub mod adjust;
pub mod breaks;
pub mod end;
pub mod expense;
pub mod export;
pub mod init;
pub mod note;
pub mod report;
pub mod sessions;
pub mod start;
pub mod sum;
pub mod sync;
pub mod task;

use crate::db::{db::Db, records::SqliteStore};
use crate::libs::{clock::SystemClock, config::Config, store::SessionStore};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Start a work session")]
    Start,
    #[command(about = "End the current work session")]
    End,
    #[command(subcommand, about = "Manage breaks within the current session")]
    Break(breaks::BreakCommand),
    #[command(about = "Adjust recorded session times")]
    Adjust(adjust::AdjustArgs),
    #[command(about = "Update session notes")]
    Note(note::NoteArgs),
    #[command(subcommand, about = "Manage the current session's task checklist")]
    Task(task::TaskCommand),
    #[command(subcommand, about = "Track expenses")]
    Expense(expense::ExpenseCommand),
    #[command(about = "Show weekly or monthly worked time and earnings")]
    Sum(sum::SumArgs),
    #[command(subcommand, about = "List or delete recorded sessions")]
    Sessions(sessions::SessionsCommand),
    #[command(about = "Write a printable work report")]
    Report(report::ReportArgs),
    #[command(about = "Export sessions to CSV, JSON or Excel")]
    Export(export::ExportArgs),
    #[command(about = "Push local records to the configured cloud store")]
    Sync,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Start => start::cmd(),
            Commands::End => end::cmd(),
            Commands::Break(command) => breaks::cmd(command),
            Commands::Adjust(args) => adjust::cmd(args),
            Commands::Note(args) => note::cmd(args),
            Commands::Task(command) => task::cmd(command),
            Commands::Expense(command) => expense::cmd(command),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Sessions(command) => sessions::cmd(command),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Sync => sync::cmd().await,
        }
    }
}

/// Opens the session store backed by the local database, owned by the
/// configured user.
pub(crate) fn open_store() -> Result<SessionStore> {
    let config = Config::read()?;
    let adapter = SqliteStore::new(Db::new()?);
    SessionStore::load(&config.username, Arc::new(SystemClock), Box::new(adapter))
}
