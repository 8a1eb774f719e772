//! Daily aggregation and calendar validation of a parsed schedule.
//!
//! A [`Schedule`] is the whole input file reduced to a map of date →
//! [`DayBucket`]. The map is ordered so every downstream step (validation,
//! reconciliation, reporting) walks dates in ascending order and external
//! side effects stay deterministic.
//!
//! Validation applies two independent rules:
//!
//! - a date outside the working-day calendar is never synchronized; it is
//!   reported and skipped, the run continues;
//! - a working day whose total is not exactly 8 hours halts the entire run
//!   before any remote call, so a bad file never partially applies.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::parser::{parse_line, WorklogRecord};
use crate::{msg_bail_anyhow, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

/// Exact daily total required for a date to be synchronized.
pub const REQUIRED_DAY_SECONDS: i64 = 8 * 3600;

/// All records of one date plus the running total.
#[derive(Clone, Debug, Default)]
pub struct DayBucket {
    pub records: Vec<WorklogRecord>,
    pub total_seconds: i64,
}

impl DayBucket {
    pub fn total_hours(&self) -> f64 {
        self.total_seconds as f64 / 3600.0
    }

    fn push(&mut self, record: WorklogRecord) {
        self.total_seconds += record.seconds;
        self.records.push(record);
    }
}

/// The parsed schedule file, grouped by date in ascending order.
#[derive(Clone, Debug, Default)]
pub struct Schedule {
    pub days: BTreeMap<NaiveDate, DayBucket>,
}

impl Schedule {
    /// Parses the whole file content, skipping blank lines and `#` comments.
    ///
    /// Fails on the first malformed line; the error names the line number
    /// and reason, and nothing of the file is applied.
    pub fn parse(content: &str, config: &Config) -> Result<Self> {
        let mut schedule = Schedule::default();

        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let record = parse_line(line, index + 1, config)?;
            schedule.days.entry(record.date).or_default().push(record);
        }

        Ok(schedule)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// First and last date of the schedule, if any records exist.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = *self.days.keys().next()?;
        let last = *self.days.keys().next_back()?;
        Some((first, last))
    }

    /// Classifies every date against the working-day calendar.
    ///
    /// Returns the dates eligible for synchronization in ascending order.
    /// Non-working dates are reported and dropped; an off-total working day
    /// aborts the whole run so no remote state is touched.
    pub fn validate(&self, working_days: &HashSet<NaiveDate>) -> Result<Vec<NaiveDate>> {
        let mut valid = Vec::new();

        for (date, bucket) in &self.days {
            if !working_days.contains(date) {
                msg_warning!(Message::NonWorkingDaySkipped(date.to_string()));
                continue;
            }
            if bucket.total_seconds != REQUIRED_DAY_SECONDS {
                msg_bail_anyhow!(Message::InvalidDailyTotal {
                    date: date.to_string(),
                    hours: bucket.total_hours(),
                });
            }
            valid.push(*date);
        }

        Ok(valid)
    }
}
