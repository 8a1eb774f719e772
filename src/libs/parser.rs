//! Schedule line parser.
//!
//! One non-blank, non-comment line of the schedule file describes one unit
//! of work:
//!
//! ```text
//! <date> <hours> <ticket-or-keyword> [comment tokens] [account:<v>] [component:<v>]
//! ```
//!
//! The third token is resolved with a fixed precedence: a configured
//! project key prefix (the text before `-`) makes it a literal ticket id
//! carrying that project's account/component; otherwise its lowercase form
//! is looked up in the keyword table; otherwise the line is rejected.
//! Trailing `account:`/`component:` tokens override the resolved values and
//! never appear in the comment. Parsing is a pure function over the line
//! and the configuration.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";
const ACCOUNT_OVERRIDE: &str = "account:";
const COMPONENT_OVERRIDE: &str = "component:";

/// One unit of work to log, fully resolved.
///
/// Hours are carried as whole seconds, Tempo's native unit, so records can
/// be compared exactly without floating-point keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorklogRecord {
    pub date: NaiveDate,
    pub ticket: String,
    pub seconds: i64,
    pub account: String,
    pub component: String,
    pub comment: String,
}

impl WorklogRecord {
    pub fn hours(&self) -> f64 {
        self.seconds as f64 / 3600.0
    }
}

/// How the ticket token of a line was resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The token was a literal ticket id whose project key is configured.
    Explicit { ticket: String, account: String, component: String },
    /// The token matched an entry in the keyword table.
    Keyword { ticket: String, account: String, component: String },
}

impl Resolution {
    fn into_parts(self) -> (String, String, String) {
        match self {
            Resolution::Explicit { ticket, account, component } | Resolution::Keyword { ticket, account, component } => {
                (ticket, account, component)
            }
        }
    }
}

/// Resolves a ticket-or-keyword token against the configuration.
///
/// Project key match wins over keyword match; an unknown token yields
/// `None` and the caller reports the line as unparseable.
pub fn resolve(token: &str, config: &Config) -> Option<Resolution> {
    if let Some((project_key, _)) = token.split_once('-') {
        if let Some(project) = config.projects.get(project_key) {
            return Some(Resolution::Explicit {
                ticket: token.to_string(),
                account: project.account.clone(),
                component: project.component.clone(),
            });
        }
    }

    config.keywords.get(&token.to_lowercase()).map(|keyword| Resolution::Keyword {
        ticket: keyword.ticket.clone(),
        account: keyword.account.clone(),
        component: keyword.component.clone(),
    })
}

/// Parses one schedule line into a [`WorklogRecord`].
///
/// `line_no` is the 1-based position in the file, used only for error
/// reporting.
pub fn parse_line(line: &str, line_no: usize, config: &Config) -> Result<WorklogRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(parse_error(line_no, line, "too few fields"));
    }

    let date = NaiveDate::parse_from_str(tokens[0], DATE_FORMAT).map_err(|_| parse_error(line_no, line, "invalid date, expected YYYY-MM-DD"))?;

    let hours: f64 = tokens[1].parse().map_err(|_| parse_error(line_no, line, "hours must be a positive number"))?;
    if !hours.is_finite() || hours <= 0.0 {
        return Err(parse_error(line_no, line, "hours must be a positive number"));
    }
    let seconds = (hours * 3600.0).round() as i64;
    if seconds == 0 {
        return Err(parse_error(line_no, line, "hours must be a positive number"));
    }

    let resolution = resolve(tokens[2], config).ok_or_else(|| parse_error(line_no, line, "unknown project or keyword"))?;
    let (ticket, mut account, mut component) = resolution.into_parts();

    // Trailing tokens are comment text unless they carry an override;
    // the last occurrence of each override key wins.
    let mut comment_tokens: Vec<&str> = Vec::new();
    for &token in &tokens[3..] {
        if let Some(value) = token.strip_prefix(ACCOUNT_OVERRIDE) {
            account = value.to_string();
        } else if let Some(value) = token.strip_prefix(COMPONENT_OVERRIDE) {
            component = value.to_string();
        } else {
            comment_tokens.push(token);
        }
    }

    if account.is_empty() || component.is_empty() {
        return Err(parse_error(line_no, line, "account and component must not be empty"));
    }

    let comment = strip_quotes(&comment_tokens.join(" ")).to_string();

    Ok(WorklogRecord {
        date,
        ticket,
        seconds,
        account,
        component,
        comment,
    })
}

/// Strips one pair of surrounding quote characters from a comment.
fn strip_quotes(comment: &str) -> &str {
    let comment = comment.trim();
    for quote in ['"', '\''] {
        if comment.len() >= 2 && comment.starts_with(quote) && comment.ends_with(quote) {
            return &comment[1..comment.len() - 1];
        }
    }
    comment
}

fn parse_error(line_no: usize, line: &str, reason: &str) -> anyhow::Error {
    msg_error_anyhow!(Message::ScheduleParseError {
        line_no,
        line: line.trim().to_string(),
        reason: reason.to_string(),
    })
}
