//! The session store: canonical in-memory state and its mutators.
//!
//! One `SessionStore` owns the current (in-progress) session, the history of
//! ended sessions and the expense list for a single user. All mutation goes
//! through named methods; there is no other write path. Timestamps come
//! from the injected [`Clock`], never from the ambient wall clock.
//!
//! ## Persistence posture
//!
//! The store is local-first: every mutator commits the in-memory change
//! first, then pushes the whole affected record to the attached
//! [`RecordStore`]. Adapter failures are reported as a warning and never
//! roll back the local change. Records are always written whole; adapters
//! never see partial field patches.
//!
//! ## Error posture
//!
//! Validation errors ([`StoreError`]) are checked before any mutation and
//! block it. Operations targeting an unknown id are lenient no-ops
//! signalled through the return value rather than raised errors.

use crate::libs::clock::Clock;
use crate::libs::expense::{Expense, ExpenseDraft, ExpensePatch};
use crate::libs::messages::Message;
use crate::libs::persist::{Collection, RecordStore};
use crate::libs::session::{BreakInterval, Session, SessionTask};
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Validation failures surfaced by store mutators. Checked before any
/// mutation; a returned error means nothing changed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("a work session is already in progress")]
    SessionAlreadyActive,
    #[error("no active work session")]
    NoActiveSession,
    #[error("a break is already in progress")]
    BreakAlreadyOpen,
    #[error("end time must be after start time")]
    EndNotAfterStart,
}

pub struct SessionStore {
    user_id: String,
    clock: Arc<dyn Clock>,
    current: Option<Session>,
    sessions: Vec<Session>,
    expenses: Vec<Expense>,
    adapter: Option<Box<dyn RecordStore>>,
    last_id: i64,
}

impl SessionStore {
    /// Creates an empty, detached store (no persistence adapter).
    pub fn new(user_id: &str, clock: Arc<dyn Clock>) -> Self {
        Self {
            user_id: user_id.to_string(),
            clock,
            current: None,
            sessions: Vec::new(),
            expenses: Vec::new(),
            adapter: None,
            last_id: 0,
        }
    }

    /// Builds a store hydrated from the given adapter.
    ///
    /// The newest session record without an end time becomes the current
    /// session. Any older record left without an end (which should not
    /// happen) stays in history untouched; it is excluded from totals
    /// anyway.
    pub fn load(user_id: &str, clock: Arc<dyn Clock>, mut adapter: Box<dyn RecordStore>) -> Result<Self> {
        let mut sessions = Vec::new();
        for value in adapter.list_records(Collection::Sessions)? {
            match serde_json::from_value::<Session>(value) {
                Ok(session) => sessions.push(session),
                Err(err) => msg_debug!(format!("skipping malformed session record: {}", err)),
            }
        }
        sessions.sort_by_key(|session| (session.start, session.id));
        let open_pos = sessions.iter().rposition(|session| session.end.is_none());
        let current = open_pos.map(|pos| sessions.remove(pos));

        let mut expenses = Vec::new();
        for value in adapter.list_records(Collection::Expenses)? {
            match serde_json::from_value::<Expense>(value) {
                Ok(expense) => expenses.push(expense),
                Err(err) => msg_debug!(format!("skipping malformed expense record: {}", err)),
            }
        }
        expenses.sort_by_key(|expense| (expense.timestamp, expense.id));

        let last_id = sessions
            .iter()
            .map(|session| session.id)
            .chain(current.iter().map(|session| session.id))
            .chain(expenses.iter().map(|expense| expense.id))
            .max()
            .unwrap_or(0);

        Ok(Self {
            user_id: user_id.to_string(),
            clock,
            current,
            sessions,
            expenses,
            adapter: Some(adapter),
            last_id,
        })
    }

    /// The in-progress session, if any.
    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Ended sessions in chronological order.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// All sessions, history plus the current one, ordered by start time.
    pub fn all_sessions(&self) -> Vec<&Session> {
        let mut all: Vec<&Session> = self.sessions.iter().chain(self.current.iter()).collect();
        all.sort_by_key(|session| (session.start, session.id));
        all
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    // === SESSION LIFECYCLE ===

    /// Starts a new work session at the current time and installs it as
    /// the current session. Rejected while another session is active.
    pub fn start_session(&mut self) -> Result<&Session, StoreError> {
        if self.current.is_some() {
            return Err(StoreError::SessionAlreadyActive);
        }
        let session = Session {
            id: self.next_id(),
            user_id: self.user_id.clone(),
            start: self.clock.now(),
            end: None,
            breaks: Vec::new(),
            break_secs: 0,
            notes: String::new(),
            tasks: Vec::new(),
        };
        self.push_record(Collection::Sessions, session.id, &session, true);
        Ok(self.current.insert(session))
    }

    /// Ends the current session: closes any open break, stamps the end
    /// time and moves the record into history. Returns `None` (silent
    /// no-op) when no session is active.
    pub fn end_session(&mut self) -> Option<&Session> {
        let mut session = self.current.take()?;
        let now = self.clock.now();
        session.close_open_break(now);
        session.end = Some(now);
        self.push_record(Collection::Sessions, session.id, &session, false);
        self.sessions.push(session);
        self.sessions.last()
    }

    /// Overwrites the start (and optionally end) time of the matching
    /// session, current or historical.
    ///
    /// The effective pair must satisfy end > start or nothing changes. An
    /// absent `new_end` leaves the stored end untouched. Stamping an end on
    /// the active session finishes it and moves it into history. Break
    /// totals are independent of the outer window and are not rescaled.
    ///
    /// Returns `Ok(false)` when no session matches the id.
    pub fn adjust_time(&mut self, id: i64, new_start: NaiveDateTime, new_end: Option<NaiveDateTime>) -> Result<bool, StoreError> {
        let Some(session) = self.find_mut(id) else {
            return Ok(false);
        };
        let effective_end = new_end.or(session.end);
        if matches!(effective_end, Some(end) if end <= new_start) {
            return Err(StoreError::EndNotAfterStart);
        }
        session.start = new_start;
        if let Some(end) = new_end {
            session.close_open_break(end);
            session.end = Some(end);
        }
        let snapshot = session.clone();
        if snapshot.end.is_some() && self.current.as_ref().is_some_and(|current| current.id == id) {
            if let Some(done) = self.current.take() {
                self.sessions.push(done);
            }
        }
        self.push_record(Collection::Sessions, snapshot.id, &snapshot, false);
        Ok(true)
    }

    /// Unconditionally overwrites the notes of the matching session,
    /// current or historical. Returns `false` when the id is unknown.
    pub fn update_session_notes(&mut self, id: i64, notes: &str) -> bool {
        let Some(session) = self.find_mut(id) else {
            return false;
        };
        session.notes = notes.to_string();
        let snapshot = session.clone();
        self.push_record(Collection::Sessions, snapshot.id, &snapshot, false);
        true
    }

    /// Removes one ended session from history. The current session is
    /// never affected. Returns `false` when the id is unknown.
    pub fn delete_session(&mut self, id: i64) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|session| session.id != id);
        if self.sessions.len() == before {
            return false;
        }
        self.drop_record(Collection::Sessions, id);
        true
    }

    /// Removes every ended session from history, leaving the current
    /// session in place. Returns the number of sessions removed.
    pub fn delete_all_sessions(&mut self) -> usize {
        let removed = self.sessions.len();
        self.sessions.clear();
        self.wipe_records(Collection::Sessions);
        // The collection wipe took the current session's record with it.
        if let Some(session) = self.current.clone() {
            self.push_record(Collection::Sessions, session.id, &session, true);
        }
        removed
    }

    // === BREAK ACCUMULATOR ===

    /// Opens a break in the current session. Rejected when no session is
    /// active or a break is already open.
    pub fn start_break(&mut self) -> Result<NaiveDateTime, StoreError> {
        let now = self.clock.now();
        {
            let session = self.current.as_mut().ok_or(StoreError::NoActiveSession)?;
            if session.open_break().is_some() {
                return Err(StoreError::BreakAlreadyOpen);
            }
            session.breaks.push(BreakInterval { start: now, end: None });
        }
        self.persist_current();
        Ok(now)
    }

    /// Closes the open break, folding its whole seconds into the session's
    /// accumulated break time. Returns the seconds added, or `None`
    /// (no-op) when there is no open break.
    pub fn end_break(&mut self) -> Option<i64> {
        let now = self.clock.now();
        let secs = self.current.as_mut()?.close_open_break(now)?;
        self.persist_current();
        Some(secs)
    }

    /// Adds (or removes, when negative) whole minutes to the current
    /// session's accumulated break time. The result is clamped at zero
    /// regardless of how far the adjustment over-subtracts. Returns the
    /// new total in seconds, or `None` when no session is active.
    pub fn adjust_break_time(&mut self, minutes: i64) -> Option<i64> {
        let session = self.current.as_mut()?;
        session.break_secs = (session.break_secs + minutes * 60).max(0);
        let total = session.break_secs;
        self.persist_current();
        Some(total)
    }

    // === TASK CHECKLIST ===

    /// Appends a task to the current session's checklist and returns its id.
    pub fn add_task(&mut self, text: &str) -> Result<i64, StoreError> {
        let session = self.current.as_mut().ok_or(StoreError::NoActiveSession)?;
        let id = session.tasks.last().map_or(1, |task| task.id + 1);
        session.tasks.push(SessionTask {
            id,
            text: text.to_string(),
            completed: false,
        });
        self.persist_current();
        Ok(id)
    }

    /// Flips the completion state of a task on the current session.
    /// Returns `false` when there is no active session or no such task.
    pub fn toggle_task(&mut self, task_id: i64) -> bool {
        let Some(session) = self.current.as_mut() else {
            return false;
        };
        let Some(task) = session.tasks.iter_mut().find(|task| task.id == task_id) else {
            return false;
        };
        task.completed = !task.completed;
        self.persist_current();
        true
    }

    // === EXPENSES ===

    /// Records a new expense and returns its id.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> i64 {
        let expense = Expense {
            id: self.next_id(),
            user_id: self.user_id.clone(),
            session_id: draft.session_id,
            kind: draft.kind,
            amount: draft.amount,
            description: draft.description,
            timestamp: self.clock.now(),
            receipt: draft.receipt,
        };
        self.push_record(Collection::Expenses, expense.id, &expense, true);
        let id = expense.id;
        self.expenses.push(expense);
        id
    }

    /// Applies a typed patch to the matching expense. Returns `false`
    /// when the id is unknown.
    pub fn update_expense(&mut self, id: i64, patch: &ExpensePatch) -> bool {
        let Some(expense) = self.expenses.iter_mut().find(|expense| expense.id == id) else {
            return false;
        };
        patch.apply(expense);
        let snapshot = expense.clone();
        self.push_record(Collection::Expenses, snapshot.id, &snapshot, false);
        true
    }

    /// Removes the matching expense. Returns `false` when the id is unknown.
    pub fn delete_expense(&mut self, id: i64) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|expense| expense.id != id);
        if self.expenses.len() == before {
            return false;
        }
        self.drop_record(Collection::Expenses, id);
        true
    }

    /// Removes every recorded expense. Returns the number removed.
    pub fn clear_expenses(&mut self) -> usize {
        let removed = self.expenses.len();
        self.expenses.clear();
        self.wipe_records(Collection::Expenses);
        removed
    }

    // === INTERNALS ===

    /// Issues the next record id: current clock milliseconds, bumped past
    /// the last issued id so ids stay unique even within one millisecond.
    fn next_id(&mut self) -> i64 {
        let millis = self.clock.now().and_utc().timestamp_millis();
        self.last_id = millis.max(self.last_id + 1);
        self.last_id
    }

    fn find_mut(&mut self, id: i64) -> Option<&mut Session> {
        if let Some(session) = self.current.as_mut() {
            if session.id == id {
                return Some(session);
            }
        }
        self.sessions.iter_mut().find(|session| session.id == id)
    }

    /// Persists the whole current session after a mutation.
    fn persist_current(&mut self) {
        let Some(session) = self.current.clone() else {
            return;
        };
        self.push_record(Collection::Sessions, session.id, &session, false);
    }

    /// Writes a whole record through the adapter. Failures are reported
    /// and otherwise ignored; the in-memory mutation stands.
    fn push_record<T: Serialize>(&mut self, collection: Collection, id: i64, record: &T, created: bool) {
        let Some(adapter) = self.adapter.as_mut() else {
            return;
        };
        let value = match serde_json::to_value(record) {
            Ok(value) => value,
            Err(err) => {
                msg_warning!(Message::CouldNotSave(err.to_string()));
                return;
            }
        };
        let result = if created {
            adapter.create_record(collection, id, &value)
        } else {
            adapter.update_record(collection, id, &value)
        };
        if let Err(err) = result {
            msg_warning!(Message::CouldNotSave(err.to_string()));
        }
    }

    fn drop_record(&mut self, collection: Collection, id: i64) {
        let Some(adapter) = self.adapter.as_mut() else {
            return;
        };
        if let Err(err) = adapter.delete_record(collection, id) {
            msg_warning!(Message::CouldNotSave(err.to_string()));
        }
    }

    fn wipe_records(&mut self, collection: Collection) {
        let Some(adapter) = self.adapter.as_mut() else {
            return;
        };
        if let Err(err) = adapter.delete_all(collection) {
            msg_warning!(Message::CouldNotSave(err.to_string()));
        }
    }
}
