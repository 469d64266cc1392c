//! Write a printable work report.

use crate::libs::clock::{Clock, SystemClock};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::report::render_document;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Output file (defaults to a timestamped name in the working directory)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let store = super::open_store()?;
    let generated_at = SystemClock.now();

    let sessions = store.all_sessions();
    let document = render_document(&sessions, &config.username, generated_at);

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("shiftshift_report_{}.txt", generated_at.format("%Y%m%d_%H%M%S"))));
    fs::write(&path, document)?;

    msg_success!(Message::ReportWritten(path.display().to_string()));
    Ok(())
}
