//! End the current work session.

use crate::libs::formatter::format_hm;
use crate::libs::messages::Message;
use crate::libs::summary;
use crate::{msg_info, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut store = super::open_store()?;
    match store.end_session() {
        Some(session) => {
            let worked = summary::session_minutes(session).unwrap_or(0);
            msg_success!(Message::SessionEnded(format_hm(worked)));
        }
        None => msg_info!(Message::NoActiveSession),
    }
    Ok(())
}
