//! Monthly schedule template rendering.
//!
//! `worklog generate` asks the service for the month's working days and
//! writes a skeleton schedule: a header block documenting the line grammar
//! followed by one placeholder line per working day. The placeholder
//! carries only date and hours, so applying an unedited template fails
//! parsing instead of silently logging placeholder work.

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Parses a `YYYY-MM` argument into the first and last day of the month.
pub fn month_range(month: &str) -> Result<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
        .map_err(|_| msg_error_anyhow!(Message::InvalidMonthArgument(month.to_string())))?;

    let (next_year, next_month) = match first.month() {
        12 => (first.year() + 1, 1),
        m => (first.year(), m + 1),
    };
    // Unwraps cannot fail: the inputs are a valid year/month pair and the
    // first of a month always has a predecessor.
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap().pred_opt().unwrap();

    Ok((first, last))
}

/// Renders the template content for one month.
///
/// Working days outside the month are ignored; days are listed in
/// ascending order.
pub fn render(month: &str, first: NaiveDate, last: NaiveDate, working_days: &HashSet<NaiveDate>) -> String {
    let mut days: Vec<NaiveDate> = working_days.iter().copied().filter(|day| *day >= first && *day <= last).collect();
    days.sort();

    let mut content = String::new();
    content.push_str(&format!("# Work schedule for {}\n", month));
    content.push_str("#\n");
    content.push_str("# One entry per line:\n");
    content.push_str("#   <date> <hours> <ticket-or-keyword> [comment] [account:<v>] [component:<v>]\n");
    content.push_str("#\n");
    content.push_str("# Blank lines and lines starting with '#' are ignored.\n");
    content.push_str("# Every working day must total exactly 8 hours.\n");
    content.push('\n');

    for day in &days {
        content.push_str(&format!("{} 8.0\n", day.format("%Y-%m-%d")));
    }

    content
}

/// Counts the placeholder lines a rendered template carries.
///
/// Lines are classified the same way `Schedule::parse` classifies them:
/// after trimming, blank lines and `#` comments do not count.
pub fn day_count(content: &str) -> usize {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .count()
}

/// Writes the template, failing if the file already exists.
pub fn write_new(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path).map_err(|err| {
        if err.kind() == ErrorKind::AlreadyExists {
            msg_error_anyhow!(Message::TemplateFileExists(path.display().to_string()))
        } else {
            err.into()
        }
    })?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
