//! Adjust recorded session times.
//!
//! Overwrites the start (and optionally end) time of a session, current or
//! historical. The resulting end must lie after the start or the command
//! refuses without changing anything. Stamping an end on the active session
//! finishes it.

use crate::libs::messages::Message;
use crate::libs::store::StoreError;
use crate::{msg_error, msg_success};
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Args;

#[derive(Debug, Args)]
pub struct AdjustArgs {
    /// Session id to adjust (defaults to the active session)
    #[arg(long, short)]
    session: Option<i64>,

    /// New start time (YYYY-MM-DD HH:MM)
    #[arg(long)]
    start: String,

    /// New end time (YYYY-MM-DD HH:MM); leaves the stored end unchanged when omitted
    #[arg(long)]
    end: Option<String>,
}

pub fn cmd(args: AdjustArgs) -> Result<()> {
    let mut store = super::open_store()?;

    let id = match args.session.or_else(|| store.current().map(|session| session.id)) {
        Some(id) => id,
        None => {
            msg_error!(Message::NoActiveSession);
            return Ok(());
        }
    };

    let new_start = parse_timestamp(&args.start)?;
    let new_end = args.end.as_deref().map(parse_timestamp).transpose()?;

    match store.adjust_time(id, new_start, new_end) {
        Ok(true) => msg_success!(Message::TimeAdjustmentApplied),
        Ok(false) => msg_error!(Message::SessionNotFound(id)),
        Err(StoreError::EndNotAfterStart) => msg_error!(Message::EndNotAfterStart),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    Ok(NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M")?)
}
