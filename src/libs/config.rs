//! Configuration management for the worklog application.
//!
//! The configuration is a single JSON file stored in the platform-specific
//! application data directory. It carries three things:
//!
//! - **Tempo settings**: base URL, API token, and worker id for the remote
//!   Jira/Tempo instance. Optional; commands that talk to the service fail
//!   with a pointer to `worklog init` when it is missing.
//! - **Project table**: maps a project key prefix (the part of a ticket id
//!   before the `-`, e.g. `PROJ`) to its default Tempo account and
//!   component.
//! - **Keyword table**: maps a lowercase shorthand (e.g. `interview`) to a
//!   full (ticket, account, component) triple so recurring activities do
//!   not need an explicit ticket id on every line.
//!
//! The whole structure is constructed once at startup and passed by
//! reference into the components that need it; nothing reads configuration
//! from global state.
//!
//! ## File location
//!
//! - **Windows**: `%LOCALAPPDATA%\lacodda\worklog\config.json`
//! - **macOS**: `~/Library/Application Support/lacodda/worklog/config.json`
//! - **Linux**: `~/.local/share/lacodda/worklog/config.json`

use super::data_storage::DataStorage;
use crate::api::tempo::TempoConfig;
use crate::libs::messages::Message;
use crate::msg_info;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default account and component for tickets of one Jira project.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProjectConfig {
    /// Tempo account attribute value logged for this project's tickets
    pub account: String,
    /// Tempo component attribute value logged for this project's tickets
    pub component: String,
}

/// Expansion of a schedule keyword into a full worklog target.
///
/// Keywords cover recurring activities (meetings, interviews, on-call) that
/// always land on the same ticket, so the schedule file can name them by a
/// single word instead of repeating the ticket id and attributes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KeywordConfig {
    /// Ticket id the keyword stands for, e.g. `WEW-416`
    pub ticket: String,
    pub account: String,
    pub component: String,
}

/// Main configuration container for the entire application.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Jira/Tempo connection settings.
    ///
    /// Optional so the parser-side commands and tests can run without a
    /// remote service configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo: Option<TempoConfig>,

    /// Project key prefix → default account/component.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub projects: BTreeMap<String, ProjectConfig>,

    /// Lowercase keyword → (ticket, account, component).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub keywords: BTreeMap<String, KeywordConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// Returns the default (empty) configuration when no file exists, so
    /// the application can run with minimal setup. A file that exists but
    /// cannot be read or parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    ///
    /// The mapping tables use `BTreeMap`, so the written file keeps a
    /// stable key order and stays diff-friendly under manual editing.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if one exists.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Runs the interactive configuration setup.
    ///
    /// Starts from the existing configuration (so current values become
    /// prompt defaults), collects the Tempo connection settings, and
    /// returns the updated configuration for saving. The project and
    /// keyword tables are meant to be hand-edited JSON; the wizard only
    /// points the user at them.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        config.tempo = Some(TempoConfig::init(&config.tempo)?);
        msg_info!(Message::MappingTablesHint);

        Ok(config)
    }
}
