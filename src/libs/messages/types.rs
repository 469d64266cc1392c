#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    SessionStarted(String),     // start time
    SessionEnded(String),       // worked duration
    NoActiveSession,
    SessionAlreadyActive,
    SessionNotFound(i64),
    SessionDeleted(i64),
    SessionsCleared(usize),
    ConfirmDeleteSession(i64),
    ConfirmClearSessions(usize),
    NoSessionsRecorded,

    // === BREAK MESSAGES ===
    BreakStarted(String), // start time
    BreakEnded(String),   // break duration
    NoOpenBreak,
    BreakAlreadyOpen,
    BreakTimeAdjusted(i64), // new total in minutes
    BreakAdjustWhileOpen,

    // === TIME ADJUSTMENT MESSAGES ===
    TimeAdjustmentApplied,
    EndNotAfterStart,

    // === NOTES & TASK MESSAGES ===
    NotesUpdated(i64),
    TaskAdded(i64),
    TaskToggled(i64),
    TaskNotFound(i64),
    NoTasksRecorded,

    // === EXPENSE MESSAGES ===
    ExpenseAdded(i64),
    ExpenseUpdated(i64),
    ExpenseDeleted(i64),
    ExpenseNotFound(i64),
    ExpensesCleared(usize),
    ExpenseAmountNegative,
    ConfirmDeleteExpense(i64),
    ConfirmClearExpenses(usize),
    NoExpensesRecorded,

    // === SUMMARY MESSAGES ===
    SummaryHeader(String), // window label

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,

    // === PERSISTENCE & EXPORT MESSAGES ===
    CouldNotSave(String),
    ExportCompleted(String),
    ReportWritten(String),
    CloudNotConfigured,
    SyncCompleted(usize),
    SyncFailed(String),

    // === GENERIC MESSAGES ===
    OperationCancelled,
}
