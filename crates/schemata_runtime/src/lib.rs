//! CLI, REPL, and schema file I/O for Schemata.
//!
//! This crate provides:
//! - [`Session`] - A loaded schema and the file it came from
//! - [`Repl`] - Interactive browser over a loaded schema
//! - JSON and `MessagePack` reading and writing of schemas and snapshots
//! - Logging setup for the `schemata` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod editor;
pub mod logging;
pub mod report;
pub mod repl;
pub mod serialize;
pub mod session;

pub use command::{Command, CommandError};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use logging::init_logging;
pub use report::{batch_report, describe, issues_listing, order_listing, summary_line};
pub use repl::{Outcome, Repl};
pub use serialize::{Format, from_bytes, load_schema, save_schema, save_snapshot, to_bytes};
pub use session::Session;
