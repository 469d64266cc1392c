//! Start a work session.

use crate::libs::formatter::TIME_FORMAT;
use crate::libs::messages::Message;
use crate::libs::store::StoreError;
use crate::{msg_error, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut store = super::open_store()?;
    match store.start_session() {
        Ok(session) => {
            let started = session.start.format(TIME_FORMAT).to_string();
            msg_success!(Message::SessionStarted(started));
        }
        Err(StoreError::SessionAlreadyActive) => msg_error!(Message::SessionAlreadyActive),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
