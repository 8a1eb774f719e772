//! # Worklog - Jira/Tempo schedule synchronization
//!
//! A command-line utility that keeps a plain-text work schedule and the
//! Tempo Timesheets worklogs of a Jira instance in sync.
//!
//! ## Features
//!
//! - **Schedule Parsing**: One worklog per line with project-key and
//!   keyword resolution plus inline account/component overrides
//! - **Validation**: Working-day calendar from the service, strict
//!   8-hour daily totals
//! - **Reconciliation**: Per-date diff against the remote state,
//!   delete-and-recreate only where the two sides differ
//! - **Template Generation**: Monthly skeleton schedule from the
//!   working-day calendar
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worklog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
