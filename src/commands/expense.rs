//! Expense tracking commands.
//!
//! Expenses live independently of sessions and are created, edited and
//! deleted directly. Destructive operations prompt for confirmation unless
//! forced.

use crate::libs::expense::{ExpenseDraft, ExpensePatch, ExpenseType};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Subcommand)]
pub enum ExpenseCommand {
    #[command(about = "Record a new expense")]
    Add(AddExpenseArgs),
    #[command(about = "Edit a recorded expense")]
    Edit(EditExpenseArgs),
    #[command(about = "Delete a recorded expense")]
    Delete(DeleteExpenseArgs),
    #[command(about = "List recorded expenses")]
    List,
    #[command(about = "Delete all recorded expenses")]
    Clear(ClearExpensesArgs),
}

#[derive(Debug, Args)]
pub struct AddExpenseArgs {
    /// Expense category
    #[arg(long, value_enum)]
    kind: ExpenseType,

    /// Amount spent
    #[arg(long)]
    amount: f64,

    /// What the expense was for
    #[arg(long, default_value = "")]
    description: String,

    /// Session the expense belongs to
    #[arg(long)]
    session: Option<i64>,

    /// Reference to a receipt image
    #[arg(long)]
    receipt: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditExpenseArgs {
    /// Expense id to edit
    id: i64,

    #[arg(long, value_enum)]
    kind: Option<ExpenseType>,

    #[arg(long)]
    amount: Option<f64>,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    receipt: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteExpenseArgs {
    /// Expense id to delete
    id: i64,

    /// Skip confirmation prompt
    #[arg(long)]
    force: bool,
}

#[derive(Debug, Args)]
pub struct ClearExpensesArgs {
    /// Skip confirmation prompt
    #[arg(long)]
    force: bool,
}

pub fn cmd(command: ExpenseCommand) -> Result<()> {
    let mut store = super::open_store()?;
    match command {
        ExpenseCommand::Add(args) => {
            if args.amount < 0.0 {
                msg_error!(Message::ExpenseAmountNegative);
                return Ok(());
            }
            let id = store.add_expense(ExpenseDraft {
                session_id: args.session,
                kind: args.kind,
                amount: args.amount,
                description: args.description,
                receipt: args.receipt,
            });
            msg_success!(Message::ExpenseAdded(id));
        }
        ExpenseCommand::Edit(args) => {
            if args.amount.is_some_and(|amount| amount < 0.0) {
                msg_error!(Message::ExpenseAmountNegative);
                return Ok(());
            }
            let patch = ExpensePatch {
                kind: args.kind,
                amount: args.amount,
                description: args.description,
                receipt: args.receipt,
            };
            if store.update_expense(args.id, &patch) {
                msg_success!(Message::ExpenseUpdated(args.id));
            } else {
                msg_error!(Message::ExpenseNotFound(args.id));
            }
        }
        ExpenseCommand::Delete(args) => {
            if !args.force && !confirm(Message::ConfirmDeleteExpense(args.id))? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            if store.delete_expense(args.id) {
                msg_success!(Message::ExpenseDeleted(args.id));
            } else {
                msg_error!(Message::ExpenseNotFound(args.id));
            }
        }
        ExpenseCommand::List => {
            if store.expenses().is_empty() {
                msg_info!(Message::NoExpensesRecorded);
            } else {
                View::expenses(store.expenses())?;
            }
        }
        ExpenseCommand::Clear(args) => {
            let count = store.expenses().len();
            if count == 0 {
                msg_info!(Message::NoExpensesRecorded);
                return Ok(());
            }
            if !args.force && !confirm(Message::ConfirmClearExpenses(count))? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            let removed = store.clear_expenses();
            msg_success!(Message::ExpensesCleared(removed));
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
