//! Break management within the current session.
//!
//! Breaks reduce the worked time of a session. Besides starting and
//! stopping a live break, the accumulated total can be corrected by a
//! signed number of minutes; corrections are refused while a break is open
//! and the total never goes below zero.

use crate::libs::formatter::{format_hm, TIME_FORMAT};
use crate::libs::messages::Message;
use crate::libs::store::StoreError;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum BreakCommand {
    #[command(about = "Start a break")]
    Start,
    #[command(about = "Stop the open break")]
    Stop,
    #[command(about = "Add or remove accumulated break minutes")]
    Adjust(AdjustBreakArgs),
}

#[derive(Debug, Args)]
pub struct AdjustBreakArgs {
    /// Signed number of minutes to add (negative removes)
    #[arg(allow_hyphen_values = true)]
    minutes: i64,
}

pub fn cmd(command: BreakCommand) -> Result<()> {
    let mut store = super::open_store()?;
    match command {
        BreakCommand::Start => match store.start_break() {
            Ok(started) => msg_success!(Message::BreakStarted(started.format(TIME_FORMAT).to_string())),
            Err(StoreError::NoActiveSession) => msg_error!(Message::NoActiveSession),
            Err(StoreError::BreakAlreadyOpen) => msg_error!(Message::BreakAlreadyOpen),
            Err(err) => return Err(err.into()),
        },
        BreakCommand::Stop => match store.end_break() {
            Some(secs) => msg_success!(Message::BreakEnded(format_hm(secs / 60))),
            None => msg_info!(Message::NoOpenBreak),
        },
        BreakCommand::Adjust(args) => {
            if store.current().is_some_and(|session| session.open_break().is_some()) {
                msg_error!(Message::BreakAdjustWhileOpen);
                return Ok(());
            }
            match store.adjust_break_time(args.minutes) {
                Some(total_secs) => msg_success!(Message::BreakTimeAdjusted(total_secs / 60)),
                None => msg_error!(Message::NoActiveSession),
            }
        }
    }
    Ok(())
}
