//! Display implementation for application messages.
//!
//! All user-facing text lives here, keeping wording consistent across the
//! command layer and making the message catalog easy to review in one place.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::SessionStarted(time) => format!("Work session started at {}", time),
            Message::SessionEnded(duration) => format!("Work session ended, {} worked", duration),
            Message::NoActiveSession => "No active work session".to_string(),
            Message::SessionAlreadyActive => "A work session is already in progress. End it before starting a new one".to_string(),
            Message::SessionNotFound(id) => format!("No session found with id {}", id),
            Message::SessionDeleted(id) => format!("Session {} deleted", id),
            Message::SessionsCleared(count) => format!("Deleted {} recorded session(s)", count),
            Message::ConfirmDeleteSession(id) => format!("Delete session {}? This cannot be undone", id),
            Message::ConfirmClearSessions(count) => format!("Delete all {} recorded session(s)? This cannot be undone", count),
            Message::NoSessionsRecorded => "No sessions recorded yet".to_string(),

            // === BREAK MESSAGES ===
            Message::BreakStarted(time) => format!("Break started at {}", time),
            Message::BreakEnded(duration) => format!("Break ended after {}", duration),
            Message::NoOpenBreak => "No open break to stop".to_string(),
            Message::BreakAlreadyOpen => "A break is already in progress".to_string(),
            Message::BreakTimeAdjusted(minutes) => format!("Break time adjusted, {} minute(s) total", minutes),
            Message::BreakAdjustWhileOpen => "Stop the open break before adjusting break time".to_string(),

            // === TIME ADJUSTMENT MESSAGES ===
            Message::TimeAdjustmentApplied => "Session times updated".to_string(),
            Message::EndNotAfterStart => "End time must be after start time".to_string(),

            // === NOTES & TASK MESSAGES ===
            Message::NotesUpdated(id) => format!("Notes updated for session {}", id),
            Message::TaskAdded(id) => format!("Task {} added", id),
            Message::TaskToggled(id) => format!("Task {} toggled", id),
            Message::TaskNotFound(id) => format!("No task found with id {}", id),
            Message::NoTasksRecorded => "No tasks on the current session".to_string(),

            // === EXPENSE MESSAGES ===
            Message::ExpenseAdded(id) => format!("Expense {} added", id),
            Message::ExpenseUpdated(id) => format!("Expense {} updated", id),
            Message::ExpenseDeleted(id) => format!("Expense {} deleted", id),
            Message::ExpenseNotFound(id) => format!("No expense found with id {}", id),
            Message::ExpensesCleared(count) => format!("Deleted {} expense(s)", count),
            Message::ExpenseAmountNegative => "Expense amount cannot be negative".to_string(),
            Message::ConfirmDeleteExpense(id) => format!("Delete expense {}? This cannot be undone", id),
            Message::ConfirmClearExpenses(count) => format!("Delete all {} expense(s)? This cannot be undone", count),
            Message::NoExpensesRecorded => "No expenses recorded yet".to_string(),

            // === SUMMARY MESSAGES ===
            Message::SummaryHeader(label) => format!("Worked time for {}", label),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),

            // === PERSISTENCE & EXPORT MESSAGES ===
            Message::CouldNotSave(reason) => format!("Could not save changes: {}", reason),
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
            Message::ReportWritten(path) => format!("Report written to: {}", path),
            Message::CloudNotConfigured => "No cloud record store configured. Run 'shiftshift init' to set one up".to_string(),
            Message::SyncCompleted(count) => format!("Pushed {} session(s) to the cloud store", count),
            Message::SyncFailed(reason) => format!("Cloud push failed: {}", reason),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
