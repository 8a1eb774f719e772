//! Display implementation for worklog application messages.
//!
//! Converts structured [`Message`] values into the human-readable text that
//! ends up on the terminal. All wording lives here, so the rest of the code
//! never formats user-facing strings directly.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigNotFound => "No configuration file found".to_string(),
            Message::ConfigModuleTempo => "Tempo settings".to_string(),
            Message::TempoNotConfigured => "Tempo is not configured. Run 'worklog init' first".to_string(),
            Message::PromptTempoApiUrl => "Enter the Jira base URL".to_string(),
            Message::PromptTempoToken => "Enter your Tempo API token".to_string(),
            Message::PromptTempoWorker => "Enter your Jira worker id".to_string(),
            Message::MappingTablesHint => {
                "Project and keyword mappings are plain JSON tables; edit 'projects' and 'keywords' in the config file".to_string()
            }

            // === SCHEDULE PARSING MESSAGES ===
            Message::ScheduleParseError { line_no, line, reason } => {
                format!("Line {}: {} ('{}')", line_no, reason, line)
            }
            Message::ScheduleFileEmpty(path) => format!("Schedule file '{}' contains no entries", path),

            // === VALIDATION MESSAGES ===
            Message::InvalidDailyTotal { date, hours } => {
                format!("{}: total is {} hours, expected exactly 8 — nothing was applied", date, hours)
            }
            Message::NonWorkingDaySkipped(date) => format!("{}: not a working day, skipped", date),
            Message::NoDatesToSync => "No dates eligible for synchronization".to_string(),

            // === RECONCILIATION MESSAGES ===
            Message::ApplyingSchedule(file) => format!("Applying schedule '{}'", file),
            Message::DateInSync(date) => format!("{}: no changes", date),
            Message::DateReconciled { date, deleted, created } => {
                format!("{}: deleted {}, created {} worklogs", date, deleted, created)
            }
            Message::ReconcilePlanHeader(date) => format!("Changes for {}", date),
            Message::WorklogFetchFailed { date, error } => {
                format!("{}: failed to fetch remote worklogs: {}", date, error)
            }
            Message::WorklogDeleteFailed { date, worklog_id, error } => {
                format!("{}: failed to delete worklog {}: {}", date, worklog_id, error)
            }
            Message::WorklogCreateFailed { date, ticket, error } => {
                format!("{}: failed to create worklog for {}: {}", date, ticket, error)
            }
            Message::ApplyFinished { synced, in_sync, failed } => {
                format!("Done: {} date(s) synchronized, {} already in sync, {} failed", synced, in_sync, failed)
            }

            // === TEMPLATE MESSAGES ===
            Message::TemplateFileExists(path) => {
                format!("Template '{}' already exists, refusing to overwrite", path)
            }
            Message::TemplateWritten { path, days } => {
                format!("Template '{}' written with {} working day(s)", path, days)
            }
            Message::NoWorkingDaysInMonth(month) => format!("No working days reported for {}", month),
            Message::InvalidMonthArgument(arg) => format!("Invalid month '{}', expected YYYY-MM", arg),

            // === TEMPO API MESSAGES ===
            Message::TempoRequestFailed { status, body } => {
                format!("Tempo request failed: {} {}", status, body)
            }
            Message::WorkingDaysRequested { from, to } => {
                format!("Requesting working days from {} to {}", from, to)
            }
        };
        write!(f, "{}", text)
    }
}
