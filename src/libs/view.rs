//! Terminal table views.

use crate::libs::expense::Expense;
use crate::libs::formatter::{format_hm, DATE_FORMAT, TIME_FORMAT};
use crate::libs::session::{Session, SessionTask};
use crate::libs::summary::{self, TimeTotals, Wage};
use anyhow::Result;
use chrono::NaiveDateTime;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints a session table. Active sessions show a live duration
    /// computed against `now` and an "active" end marker.
    pub fn sessions(sessions: &[&Session], now: NaiveDateTime) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "START", "END", "DURATION", "BREAK", "NOTES"]);
        for session in sessions {
            let (end, duration) = match session.end {
                Some(end) => (
                    end.format(TIME_FORMAT).to_string(),
                    format_hm(summary::session_minutes(session).unwrap_or(0)),
                ),
                None => ("active".to_string(), format_hm(summary::live_minutes(session, now))),
            };
            table.add_row(row![
                session.id,
                session.start.format(DATE_FORMAT),
                session.start.format(TIME_FORMAT),
                end,
                duration,
                format_hm(session.break_minutes()),
                session.notes
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints aggregated totals, with earnings only when configured.
    pub fn totals(totals: &TimeTotals, wage: &Wage, show_earnings: bool) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["WORKED", format!("{}h {:02}m", totals.hours, totals.minutes)]);
        if show_earnings && wage.hourly > 0.0 {
            table.add_row(row!["GROSS", format!("{:.2}", totals.gross_earnings)]);
            table.add_row(row!["NET", format!("{:.2}", totals.net_earnings)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn tasks(tasks: &[SessionTask]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "TASK"]);
        for task in tasks {
            table.add_row(row![task.id, if task.completed { "x" } else { "" }, task.text]);
        }
        table.printstd();

        Ok(())
    }

    pub fn expenses(expenses: &[Expense]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "TYPE", "AMOUNT", "DESCRIPTION", "SESSION"]);
        for expense in expenses {
            table.add_row(row![
                expense.id,
                expense.timestamp.format(DATE_FORMAT),
                expense.kind,
                format!("{:.2}", expense.amount),
                expense.description,
                expense.session_id.map_or_else(String::new, |id| id.to_string())
            ]);
        }
        table.printstd();

        Ok(())
    }
}
