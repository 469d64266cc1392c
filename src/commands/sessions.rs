//! List or delete recorded sessions.
//!
//! Deletion is irreversible and therefore confirmed interactively unless
//! forced. The active session is never deleted; end it first.

use crate::libs::clock::{Clock, SystemClock};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Subcommand)]
pub enum SessionsCommand {
    #[command(about = "List all recorded sessions")]
    List,
    #[command(about = "Delete one recorded session")]
    Delete(DeleteSessionArgs),
    #[command(about = "Delete all recorded sessions")]
    Clear(ClearSessionsArgs),
}

#[derive(Debug, Args)]
pub struct DeleteSessionArgs {
    /// Session id to delete
    id: i64,

    /// Skip confirmation prompt
    #[arg(long)]
    force: bool,
}

#[derive(Debug, Args)]
pub struct ClearSessionsArgs {
    /// Skip confirmation prompt
    #[arg(long)]
    force: bool,
}

pub fn cmd(command: SessionsCommand) -> Result<()> {
    let mut store = super::open_store()?;
    match command {
        SessionsCommand::List => {
            let sessions = store.all_sessions();
            if sessions.is_empty() {
                msg_info!(Message::NoSessionsRecorded);
            } else {
                View::sessions(&sessions, SystemClock.now())?;
            }
        }
        SessionsCommand::Delete(args) => {
            if !args.force && !confirm(Message::ConfirmDeleteSession(args.id))? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            if store.delete_session(args.id) {
                msg_success!(Message::SessionDeleted(args.id));
            } else {
                msg_error!(Message::SessionNotFound(args.id));
            }
        }
        SessionsCommand::Clear(args) => {
            let count = store.sessions().len();
            if count == 0 {
                msg_info!(Message::NoSessionsRecorded);
                return Ok(());
            }
            if !args.force && !confirm(Message::ConfirmClearSessions(count))? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            let removed = store.delete_all_sessions();
            msg_success!(Message::SessionsCleared(removed));
        }
    }
    Ok(())
}

fn confirm(message: Message) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(message.to_string())
        .default(false)
        .interact()?)
}
