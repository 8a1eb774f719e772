//! User-facing message catalog.
//!
//! All terminal output is a [`Message`] variant rendered through the
//! `msg_*!` macros; the text itself lives in the `display` module.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
