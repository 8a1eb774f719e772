//! API client modules for external service integrations.
//!
//! The only external collaborator is the Jira/Tempo instance; its client
//! lives in [`tempo`]. Endpoint shapes, attribute ids, and authentication
//! are encapsulated here so the rest of the application deals in dates and
//! worklog records, never in HTTP details.

pub mod tempo;

pub use tempo::{RemoteWorklog, Tempo, TempoConfig};
