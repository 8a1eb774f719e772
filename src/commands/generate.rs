//! Monthly template generation command.
//!
//! Asks the service for the month's working days and writes
//! `<YYYY-MM>.jira` in the current directory. An existing file of the same
//! name is never overwritten; the command fails before contacting the
//! service in that case.

use crate::{
    api::tempo::Tempo,
    libs::{config::Config, messages::Message, template},
    msg_bail_anyhow, msg_debug, msg_error_anyhow, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Month to generate, in YYYY-MM form
    #[arg(required = true)]
    month: String,
}

pub async fn cmd(generate_args: GenerateArgs) -> Result<()> {
    let config = Config::read()?;
    let tempo_config = config.tempo.ok_or_else(|| msg_error_anyhow!(Message::TempoNotConfigured))?;

    let (first, last) = template::month_range(&generate_args.month)?;
    let path = PathBuf::from(format!("{}.jira", generate_args.month));
    if path.exists() {
        msg_bail_anyhow!(Message::TemplateFileExists(path.display().to_string()));
    }

    msg_debug!("{}", Message::WorkingDaysRequested {
        from: first.to_string(),
        to: last.to_string(),
    });
    let working_days = Tempo::new(&tempo_config).working_days(first, last).await?;

    let content = template::render(&generate_args.month, first, last, &working_days);
    let days = template::day_count(&content);
    if days == 0 {
        msg_warning!(Message::NoWorkingDaysInMonth(generate_args.month));
        return Ok(());
    }

    template::write_new(&path, &content)?;

    msg_success!(Message::TemplateWritten {
        path: path.display().to_string(),
        days,
    });
    Ok(())
}
