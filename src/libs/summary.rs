//! Pure aggregation over session collections.
//!
//! Everything here is a function of its inputs: the caller supplies the
//! session list, the date window and the wage configuration, and gets back
//! durations and earnings. Nothing is cached between calls; windows are
//! recomputed fresh each time, which keeps a linear scan cheap and the
//! results never stale.
//!
//! ## Duration model
//!
//! A completed session contributes its gross wall-clock minutes minus its
//! accumulated break minutes. Sessions still running contribute nothing to
//! totals; list views show them with a live counter instead (see
//! [`live_minutes`]). A session whose break time was manually inflated past
//! its gross duration is clamped to zero rather than going negative.
//!
//! ## Earnings model
//!
//! Gross earnings are worked hours times the hourly wage. Net earnings
//! apply a flat net conversion factor (default [`NET_WAGE_FACTOR`]); this
//! is a pay approximation, not a tax computation.

use crate::libs::config::Config;
use crate::libs::session::Session;
use crate::msg_debug;
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, Weekday};

/// Default net-of-tax conversion factor applied to gross earnings.
pub const NET_WAGE_FACTOR: f64 = 0.69;

/// Wage configuration consumed by [`compute_total`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wage {
    /// Hourly wage; zero suppresses earnings display.
    pub hourly: f64,
    /// Flat gross-to-net conversion factor.
    pub net_factor: f64,
}

impl Wage {
    pub fn from_config(config: &Config) -> Self {
        Self {
            hourly: config.hourly_wage,
            net_factor: config.net_wage_factor,
        }
    }
}

/// Aggregated worked time and earnings for a session collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeTotals {
    pub hours: i64,
    pub minutes: i64,
    pub gross_earnings: f64,
    pub net_earnings: f64,
}

/// Worked minutes of a completed session: gross duration minus accumulated
/// break minutes, clamped at zero. Returns `None` while the session is
/// still active.
pub fn session_minutes(session: &Session) -> Option<i64> {
    let end = session.end?;
    let gross = (end - session.start).num_minutes();
    let worked = gross - session.break_minutes();
    if worked < 0 {
        msg_debug!(format!("session {} break time exceeds its gross duration", session.id));
    }
    Some(worked.max(0))
}

/// Elapsed worked minutes of an active session as of `now`.
pub fn live_minutes(session: &Session, now: NaiveDateTime) -> i64 {
    (((now - session.start).num_seconds() - session.break_secs).max(0)) / 60
}

/// Sessions whose start date falls within the inclusive date window.
pub fn filter_by_range<'a>(sessions: &'a [Session], start: NaiveDate, end: NaiveDate) -> Vec<&'a Session> {
    sessions
        .iter()
        .filter(|session| {
            let date = session.start.date();
            date >= start && date <= end
        })
        .collect()
}

/// The Monday-start ISO week containing the given date.
pub fn week_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let week = today.week(Weekday::Mon);
    (week.first_day(), week.last_day())
}

/// The calendar month containing the given date.
pub fn month_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = today.with_day(1).unwrap_or(today);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .unwrap_or(today);
    (first, last)
}

/// Sums completed sessions into total worked time and earnings.
///
/// Active sessions contribute zero. The minutes component uses
/// non-negative remainder semantics.
pub fn compute_total(sessions: &[&Session], wage: &Wage) -> TimeTotals {
    let total_minutes: i64 = sessions.iter().filter_map(|session| session_minutes(session)).sum();

    let gross_earnings = total_minutes as f64 / 60.0 * wage.hourly;
    let net_earnings = gross_earnings * wage.net_factor;

    TimeTotals {
        hours: total_minutes.div_euclid(60),
        minutes: total_minutes.rem_euclid(60),
        gross_earnings,
        net_earnings,
    }
}
