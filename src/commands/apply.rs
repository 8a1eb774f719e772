//! Schedule application command.
//!
//! Runs the whole pipeline: parse the schedule file, aggregate per date,
//! validate against the working-day calendar and the 8-hour rule, then
//! reconcile each eligible date against the remote state. Validation is
//! fail-fast — a malformed line or an off-total working day stops the run
//! before anything is sent to the service. During reconciliation each date
//! is an independent unit: a failed fetch, delete, or create is reported
//! and the run moves on to the next date. Rerunning after a partial
//! failure re-derives the full state for the affected date.

use crate::{
    api::tempo::Tempo,
    libs::{config::Config, messages::Message, reconcile, schedule::Schedule, view::View},
    msg_error, msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Schedule file to apply
    #[arg(required = true)]
    file: PathBuf,
}

pub async fn cmd(apply_args: ApplyArgs) -> Result<()> {
    let config = Config::read()?;
    let tempo_config = config.tempo.clone().ok_or_else(|| msg_error_anyhow!(Message::TempoNotConfigured))?;
    let tempo = Tempo::new(&tempo_config);

    msg_print!(Message::ApplyingSchedule(apply_args.file.display().to_string()));

    let content = fs::read_to_string(&apply_args.file)?;
    let schedule = Schedule::parse(&content, &config)?;
    let Some((first, last)) = schedule.date_range() else {
        msg_info!(Message::ScheduleFileEmpty(apply_args.file.display().to_string()));
        return Ok(());
    };

    let working_days = tempo.working_days(first, last).await?;
    let valid_dates = schedule.validate(&working_days)?;
    if valid_dates.is_empty() {
        msg_info!(Message::NoDatesToSync);
        return Ok(());
    }

    let mut synced = 0;
    let mut in_sync = 0;
    let mut failed = 0;

    for date in valid_dates {
        let bucket = &schedule.days[&date];

        let existing = match tempo.worklogs_for(date).await {
            Ok(worklogs) => worklogs,
            Err(err) => {
                msg_error!(Message::WorklogFetchFailed {
                    date: date.to_string(),
                    error: err.to_string(),
                });
                failed += 1;
                continue;
            }
        };

        let Some(plan) = reconcile::diff(&bucket.records, &existing) else {
            msg_info!(Message::DateInSync(date.to_string()));
            in_sync += 1;
            continue;
        };

        msg_print!(Message::ReconcilePlanHeader(date.to_string()), true);
        View::plan(&plan)?;

        if !replace_date(&tempo, date, &plan).await {
            failed += 1;
            continue;
        }

        msg_success!(Message::DateReconciled {
            date: date.to_string(),
            deleted: plan.deletes.len(),
            created: plan.creates.len(),
        });
        synced += 1;
    }

    msg_print!(Message::ApplyFinished { synced, in_sync, failed }, true);
    Ok(())
}

/// Deletes every existing worklog of the date, then creates the desired
/// ones. Returns `false` on the first remote failure, which is reported
/// here and abandons this date; the caller continues with the next one.
async fn replace_date(tempo: &Tempo, date: chrono::NaiveDate, plan: &reconcile::DatePlan) -> bool {
    for worklog in &plan.deletes {
        if let Err(err) = tempo.delete_worklog(worklog.id).await {
            msg_error!(Message::WorklogDeleteFailed {
                date: date.to_string(),
                worklog_id: worklog.id,
                error: err.to_string(),
            });
            return false;
        }
    }

    for record in &plan.creates {
        if let Err(err) = tempo.create_worklog(record).await {
            msg_error!(Message::WorklogCreateFailed {
                date: date.to_string(),
                ticket: record.ticket.clone(),
                error: err.to_string(),
            });
            return false;
        }
    }

    true
}
