//! Tempo Timesheets API client.
//!
//! Thin wrapper around the Tempo plugin REST endpoints of a Jira instance.
//! Four logical operations are exposed: query the user's working-day
//! schedule, search worklogs for a date, create a worklog, and delete a
//! worklog by id. Authentication is a static bearer token from the
//! configuration; there is no session or retry handling.

use crate::libs::messages::Message;
use crate::libs::parser::WorklogRecord;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const SCHEDULE_URL: &str = "rest/tempo-core/2/user/schedule";
const WORKLOGS_URL: &str = "rest/tempo-timesheets/4/worklogs";
const WORKLOGS_SEARCH_URL: &str = "rest/tempo-timesheets/4/worklogs/search";

const DATE_FORMAT: &str = "%Y-%m-%d";
const WORKING_DAY_TYPE: &str = "WORKING_DAY";

// Work attribute ids assigned by the Tempo administrator.
const ACCOUNT_ATTRIBUTE_ID: u32 = 1;
const COMPONENT_ATTRIBUTE_ID: u32 = 2;
const ACCOUNT_ATTRIBUTE_NAME: &str = "Account";
const COMPONENT_ATTRIBUTE_NAME: &str = "Component/tool";

#[derive(Deserialize, Debug)]
struct UserSchedule {
    days: Vec<ScheduleDay>,
}

#[derive(Deserialize, Debug)]
struct ScheduleDay {
    date: String,
    #[serde(rename = "type")]
    day_type: String,
}

/// One worklog attribute as Tempo represents it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorklogAttribute {
    pub name: String,
    #[serde(rename = "workAttributeId")]
    pub work_attribute_id: u32,
    pub value: String,
}

/// The attribute map attached to every Tempo worklog.
///
/// The `_Initiative_` and `_Componenttool_` keys are the instance-specific
/// attribute identifiers for Account and Component/tool.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct WorklogAttributes {
    #[serde(rename = "_Initiative_", skip_serializing_if = "Option::is_none")]
    pub account: Option<WorklogAttribute>,
    #[serde(rename = "_Componenttool_", skip_serializing_if = "Option::is_none")]
    pub component: Option<WorklogAttribute>,
}

impl WorklogAttributes {
    fn for_record(record: &WorklogRecord) -> Self {
        Self {
            account: Some(WorklogAttribute {
                name: ACCOUNT_ATTRIBUTE_NAME.to_string(),
                work_attribute_id: ACCOUNT_ATTRIBUTE_ID,
                value: record.account.clone(),
            }),
            component: Some(WorklogAttribute {
                name: COMPONENT_ATTRIBUTE_NAME.to_string(),
                work_attribute_id: COMPONENT_ATTRIBUTE_ID,
                value: record.component.clone(),
            }),
        }
    }

    pub fn account_value(&self) -> &str {
        self.account.as_ref().map(|a| a.value.as_str()).unwrap_or("")
    }

    pub fn component_value(&self) -> &str {
        self.component.as_ref().map(|a| a.value.as_str()).unwrap_or("")
    }
}

/// A worklog as returned by the Tempo search endpoint.
///
/// The id is only ever used for deletion; semantic comparison against local
/// records goes through the reconciliation key and ignores it.
#[derive(Deserialize, Clone, Debug)]
pub struct RemoteWorklog {
    #[serde(rename = "tempoWorklogId")]
    pub id: i64,
    pub issue: RemoteIssue,
    #[serde(rename = "timeSpentSeconds")]
    pub time_spent_seconds: i64,
    pub comment: Option<String>,
    #[serde(default)]
    pub attributes: WorklogAttributes,
}

#[derive(Deserialize, Clone, Debug)]
pub struct RemoteIssue {
    pub key: String,
}

#[derive(Serialize, Debug)]
struct WorklogSearchRequest {
    from: String,
    to: String,
    worker: Vec<String>,
}

#[derive(Serialize, Debug)]
struct CreateWorklogRequest {
    #[serde(rename = "originTaskId")]
    origin_task_id: String,
    #[serde(rename = "timeSpentSeconds")]
    time_spent_seconds: i64,
    worker: String,
    attributes: WorklogAttributes,
    started: String,
    #[serde(rename = "remainingEstimate")]
    remaining_estimate: i64,
    #[serde(rename = "includeNonWorkingDays")]
    include_non_working_days: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

pub struct Tempo {
    client: Client,
    config: TempoConfig,
}

impl Tempo {
    pub fn new(config: &TempoConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// Queries the user schedule and returns the set of working days in the
    /// inclusive `[from, to]` range.
    pub async fn working_days(&self, from: NaiveDate, to: NaiveDate) -> Result<HashSet<NaiveDate>> {
        let url = format!("{}/{}", self.config.api_url, SCHEDULE_URL);
        let res = self
            .client
            .get(&url)
            .bearer_auth(&self.config.token)
            .query(&[("from", from.format(DATE_FORMAT).to_string()), ("to", to.format(DATE_FORMAT).to_string())])
            .send()
            .await?;

        let schedule: UserSchedule = Self::parse_response(res).await?;
        let days = schedule
            .days
            .iter()
            .filter(|day| day.day_type == WORKING_DAY_TYPE)
            .filter_map(|day| NaiveDate::parse_from_str(&day.date, DATE_FORMAT).ok())
            .collect();
        Ok(days)
    }

    /// Fetches all worklogs the configured worker logged on the given date.
    pub async fn worklogs_for(&self, date: NaiveDate) -> Result<Vec<RemoteWorklog>> {
        let url = format!("{}/{}", self.config.api_url, WORKLOGS_SEARCH_URL);
        let date_str = date.format(DATE_FORMAT).to_string();
        let body = WorklogSearchRequest {
            from: date_str.clone(),
            to: date_str,
            worker: vec![self.config.worker.clone()],
        };

        let res = self.client.post(&url).bearer_auth(&self.config.token).json(&body).send().await?;
        Self::parse_response(res).await
    }

    /// Creates one worklog from a local record.
    pub async fn create_worklog(&self, record: &WorklogRecord) -> Result<()> {
        let url = format!("{}/{}", self.config.api_url, WORKLOGS_URL);
        let body = CreateWorklogRequest {
            origin_task_id: record.ticket.clone(),
            time_spent_seconds: record.seconds,
            worker: self.config.worker.clone(),
            attributes: WorklogAttributes::for_record(record),
            started: record.date.format(DATE_FORMAT).to_string(),
            remaining_estimate: 0,
            include_non_working_days: false,
            comment: if record.comment.is_empty() { None } else { Some(record.comment.clone()) },
        };
        msg_debug!("Creating worklog: {:?}", body);

        let res = self.client.post(&url).bearer_auth(&self.config.token).json(&body).send().await?;
        Self::check_status(res).await
    }

    /// Deletes one worklog by its Tempo id.
    pub async fn delete_worklog(&self, worklog_id: i64) -> Result<()> {
        let url = format!("{}/{}/{}", self.config.api_url, WORKLOGS_URL, worklog_id);
        let res = self.client.delete(&url).bearer_auth(&self.config.token).send().await?;
        Self::check_status(res).await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(res: reqwest::Response) -> Result<T> {
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(msg_error_anyhow!(Message::TempoRequestFailed {
                status: status.to_string(),
                body,
            }));
        }
        Ok(res.json::<T>().await?)
    }

    async fn check_status(res: reqwest::Response) -> Result<()> {
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(msg_error_anyhow!(Message::TempoRequestFailed {
                status: status.to_string(),
                body,
            }));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TempoConfig {
    /// Base URL of the Jira instance, e.g. `https://jira.example.com`
    pub api_url: String,
    /// Bearer token for the Tempo REST API
    pub token: String,
    /// Jira worker id the worklogs belong to, e.g. `JIRAUSER55710`
    pub worker: String,
}

impl TempoConfig {
    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_url: "".to_string(),
            token: "".to_string(),
            worker: "".to_string(),
        });
        println!("{}", Message::ConfigModuleTempo);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTempoApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            token: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTempoToken.to_string())
                .default(config.token)
                .interact_text()?,
            worker: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTempoWorker.to_string())
                .default(config.worker)
                .interact_text()?,
        })
    }
}
