//! Structured message types for all user-facing output.
//!
//! Every piece of text the application prints is a variant of the [`Message`]
//! enum. Keeping the text in one place makes the output consistent and lets
//! commands report outcomes without hand-rolled format strings scattered
//! through the codebase. The actual wording lives in the `Display`
//! implementation in the `display` module.

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleTempo,
    TempoNotConfigured,
    PromptTempoApiUrl,
    PromptTempoToken,
    PromptTempoWorker,
    MappingTablesHint,

    // === SCHEDULE PARSING MESSAGES ===
    ScheduleParseError { line_no: usize, line: String, reason: String },
    ScheduleFileEmpty(String),

    // === VALIDATION MESSAGES ===
    InvalidDailyTotal { date: String, hours: f64 },
    NonWorkingDaySkipped(String),
    NoDatesToSync,

    // === RECONCILIATION MESSAGES ===
    ApplyingSchedule(String),         // file name
    DateInSync(String),               // date
    DateReconciled { date: String, deleted: usize, created: usize },
    ReconcilePlanHeader(String),      // date
    WorklogFetchFailed { date: String, error: String },
    WorklogDeleteFailed { date: String, worklog_id: i64, error: String },
    WorklogCreateFailed { date: String, ticket: String, error: String },
    ApplyFinished { synced: usize, in_sync: usize, failed: usize },

    // === TEMPLATE MESSAGES ===
    TemplateFileExists(String),       // path
    TemplateWritten { path: String, days: usize },
    NoWorkingDaysInMonth(String),     // month
    InvalidMonthArgument(String),

    // === TEMPO API MESSAGES ===
    TempoRequestFailed { status: String, body: String },
    WorkingDaysRequested { from: String, to: String },
}
