//! Weekly and monthly worked time summary.
//!
//! Aggregates completed sessions in the Monday-start ISO week or the
//! calendar month containing today, deriving gross and net earnings from
//! the configured hourly wage. The window is recomputed on every call.

use crate::libs::clock::{Clock, SystemClock};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::summary::{self, Wage};
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SumPeriod {
    Week,
    Month,
}

#[derive(Debug, Args)]
pub struct SumArgs {
    /// Aggregation window
    #[arg(long, short, value_enum, default_value = "week")]
    period: SumPeriod,
}

pub fn cmd(args: SumArgs) -> Result<()> {
    let config = Config::read()?;
    let store = super::open_store()?;
    let clock = SystemClock;
    let today = clock.today();

    let (start, end, label) = match args.period {
        SumPeriod::Week => {
            let (start, end) = summary::week_window(today);
            (start, end, format!("week {}", today.format("%V, %Y")))
        }
        SumPeriod::Month => {
            let (start, end) = summary::month_window(today);
            (start, end, today.format("%B, %Y").to_string())
        }
    };

    let sessions = summary::filter_by_range(store.sessions(), start, end);
    let wage = Wage::from_config(&config);
    let totals = summary::compute_total(&sessions, &wage);

    msg_print!(Message::SummaryHeader(label), true);
    View::totals(&totals, &wage, config.show_earnings)?;
    View::sessions(&sessions, clock.now())?;

    Ok(())
}
