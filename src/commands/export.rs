//! Export sessions to CSV, JSON or Excel.

use crate::libs::export::{ExportFormat, Exporter};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(long, short, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file (defaults to a timestamped name in the working directory)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let store = super::open_store()?;
    let sessions = store.all_sessions();

    Exporter::new(args.format, args.output).export(&sessions)?;
    Ok(())
}
