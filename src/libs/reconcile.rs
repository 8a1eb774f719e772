//! Reconciliation between desired and existing worklogs of one date.
//!
//! Both sides are reduced to a value-typed comparison key — ticket,
//! seconds, account, component, comment — that deliberately ignores the
//! remote worklog id. Equal sets mean the date is already in sync and no
//! call is made. Any difference triggers a full replace: every existing
//! remote worklog of the date is deleted and every desired record is
//! created. The per-key symmetric difference is kept alongside purely for
//! the audit report.
//!
//! This module is pure; the surrounding command drives the actual HTTP
//! calls.

use crate::api::tempo::RemoteWorklog;
use crate::libs::parser::WorklogRecord;
use std::collections::HashSet;

/// The tuple two worklogs are semantically compared by.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorklogKey {
    pub ticket: String,
    pub seconds: i64,
    pub account: String,
    pub component: String,
    pub comment: String,
}

impl From<&WorklogRecord> for WorklogKey {
    fn from(record: &WorklogRecord) -> Self {
        Self {
            ticket: record.ticket.clone(),
            seconds: record.seconds,
            account: record.account.clone(),
            component: record.component.clone(),
            comment: normalize_comment(Some(&record.comment)),
        }
    }
}

impl From<&RemoteWorklog> for WorklogKey {
    fn from(worklog: &RemoteWorklog) -> Self {
        Self {
            ticket: worklog.issue.key.clone(),
            seconds: worklog.time_spent_seconds,
            account: worklog.attributes.account_value().to_string(),
            component: worklog.attributes.component_value().to_string(),
            comment: normalize_comment(worklog.comment.as_deref()),
        }
    }
}

/// Absent and empty comments compare the same; Tempo returns `null` where
/// the schedule file has no comment text.
fn normalize_comment(comment: Option<&str>) -> String {
    comment.unwrap_or("").trim().to_string()
}

/// The mutations required to bring one date in sync.
#[derive(Clone, Debug, Default)]
pub struct DatePlan {
    /// Existing worklogs whose key is not desired anymore (audit only).
    pub stale: Vec<RemoteWorklog>,
    /// Desired records with no existing counterpart (audit only).
    pub missing: Vec<WorklogRecord>,
    /// Every existing remote worklog of the date; all are deleted.
    pub deletes: Vec<RemoteWorklog>,
    /// Every desired record of the date; all are created.
    pub creates: Vec<WorklogRecord>,
}

/// Compares desired and existing state of one date.
///
/// Returns `None` when the two sides are tuple-equal (including
/// multiplicity), meaning nothing must be sent to the service. Otherwise
/// returns the full-replace plan.
pub fn diff(desired: &[WorklogRecord], existing: &[RemoteWorklog]) -> Option<DatePlan> {
    let mut desired_keys: Vec<WorklogKey> = desired.iter().map(WorklogKey::from).collect();
    let mut existing_keys: Vec<WorklogKey> = existing.iter().map(WorklogKey::from).collect();
    desired_keys.sort();
    existing_keys.sort();

    if desired_keys == existing_keys {
        return None;
    }

    let desired_set: HashSet<&WorklogKey> = desired_keys.iter().collect();
    let existing_set: HashSet<&WorklogKey> = existing_keys.iter().collect();

    let stale = existing
        .iter()
        .filter(|worklog| !desired_set.contains(&WorklogKey::from(*worklog)))
        .cloned()
        .collect();
    let missing = desired
        .iter()
        .filter(|record| !existing_set.contains(&WorklogKey::from(*record)))
        .cloned()
        .collect();

    Some(DatePlan {
        stale,
        missing,
        deletes: existing.to_vec(),
        creates: desired.to_vec(),
    })
}
