//! Task checklist of the current session.

use crate::libs::messages::Message;
use crate::libs::store::StoreError;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    #[command(about = "Add a task to the current session")]
    Add(AddTaskArgs),
    #[command(about = "Toggle a task's completion state")]
    Done(DoneTaskArgs),
    #[command(about = "List the current session's tasks")]
    List,
}

#[derive(Debug, Args)]
pub struct AddTaskArgs {
    /// The task text
    text: String,
}

#[derive(Debug, Args)]
pub struct DoneTaskArgs {
    /// Task id to toggle
    id: i64,
}

pub fn cmd(command: TaskCommand) -> Result<()> {
    let mut store = super::open_store()?;
    match command {
        TaskCommand::Add(args) => match store.add_task(&args.text) {
            Ok(id) => msg_success!(Message::TaskAdded(id)),
            Err(StoreError::NoActiveSession) => msg_error!(Message::NoActiveSession),
            Err(err) => return Err(err.into()),
        },
        TaskCommand::Done(args) => {
            if store.toggle_task(args.id) {
                msg_success!(Message::TaskToggled(args.id));
            } else if store.current().is_none() {
                msg_error!(Message::NoActiveSession);
            } else {
                msg_error!(Message::TaskNotFound(args.id));
            }
        }
        TaskCommand::List => match store.current() {
            Some(session) if !session.tasks.is_empty() => View::tasks(&session.tasks)?,
            Some(_) => msg_info!(Message::NoTasksRecorded),
            None => msg_error!(Message::NoActiveSession),
        },
    }
    Ok(())
}
