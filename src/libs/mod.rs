pub mod config;
pub mod data_storage;
pub mod messages;
pub mod parser;
pub mod reconcile;
pub mod schedule;
pub mod template;
pub mod view;
