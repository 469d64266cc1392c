//! Update session notes.

use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct NoteArgs {
    /// Session id to annotate (defaults to the active session)
    #[arg(long, short)]
    session: Option<i64>,

    /// The note text; replaces any existing notes
    text: String,
}

pub fn cmd(args: NoteArgs) -> Result<()> {
    let mut store = super::open_store()?;

    let id = match args.session.or_else(|| store.current().map(|session| session.id)) {
        Some(id) => id,
        None => {
            msg_error!(Message::NoActiveSession);
            return Ok(());
        }
    };

    if store.update_session_notes(id, &args.text) {
        msg_success!(Message::NotesUpdated(id));
    } else {
        msg_error!(Message::SessionNotFound(id));
    }
    Ok(())
}
