//! Session, break interval and checklist task models.
//!
//! A session is one shift: a start timestamp, an optional end timestamp
//! (absent while the session is active), the break intervals taken within
//! it, and the cached cumulative break duration. Notes and tasks ride along
//! but are not time-accounted.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single break interval within a session.
///
/// An interval without an `end` is the open break. At most one open break
/// exists at a time, and only while the owning session is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakInterval {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

/// A checklist item attached to a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTask {
    pub id: i64,
    pub text: String,
    pub completed: bool,
}

/// One shift/work period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier, assigned at creation, immutable.
    pub id: i64,

    /// Owner reference.
    pub user_id: String,

    /// When the session started. Mutable only through time adjustment.
    pub start: NaiveDateTime,

    /// When the session ended; `None` while the session is active.
    pub end: Option<NaiveDateTime>,

    /// Break intervals in the order they were taken.
    #[serde(default)]
    pub breaks: Vec<BreakInterval>,

    /// Cumulative break duration in seconds. Updated whenever a break
    /// closes or the total is manually adjusted. Never negative.
    #[serde(default)]
    pub break_secs: i64,

    /// Free-text notes, editable at any time.
    #[serde(default)]
    pub notes: String,

    /// Checklist tasks, not time-accounted.
    #[serde(default)]
    pub tasks: Vec<SessionTask>,
}

impl Session {
    /// Whether the session is still running.
    pub fn is_active(&self) -> bool {
        self.end.is_none()
    }

    /// The currently open break, if any.
    pub fn open_break(&self) -> Option<&BreakInterval> {
        self.breaks.iter().rev().find(|interval| interval.end.is_none())
    }

    /// Whole minutes of accumulated break time.
    pub fn break_minutes(&self) -> i64 {
        self.break_secs / 60
    }

    /// Closes the open break at `now` and folds its duration into the
    /// cumulative total. Returns the seconds added, or `None` when no
    /// break is open.
    pub(crate) fn close_open_break(&mut self, now: NaiveDateTime) -> Option<i64> {
        let open = self.breaks.iter_mut().rev().find(|interval| interval.end.is_none())?;
        open.end = Some(now);
        let secs = (now - open.start).num_seconds().max(0);
        self.break_secs += secs;
        Some(secs)
    }
}
