use crate::libs::reconcile::DatePlan;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints the audit view of one date's reconciliation plan: the stale
    /// remote worklogs that go away and the missing local records that
    /// replace them.
    pub fn plan(plan: &DatePlan) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "TICKET", "HOURS", "ACCOUNT", "COMPONENT", "COMMENT"]);
        for worklog in &plan.stale {
            table.add_row(row![
                "-",
                worklog.issue.key,
                format!("{:.2}", worklog.time_spent_seconds as f64 / 3600.0),
                worklog.attributes.account_value(),
                worklog.attributes.component_value(),
                worklog.comment.clone().unwrap_or_default()
            ]);
        }
        for record in &plan.missing {
            table.add_row(row![
                "+",
                record.ticket,
                format!("{:.2}", record.hours()),
                record.account,
                record.component,
                record.comment
            ]);
        }
        table.printstd();

        Ok(())
    }
}
