//! # CLI Layer
//!
//! One UI client for rollcall. The only place that knows about terminal I/O,
//! exit codes and output formatting.
//!
//! Every invocation is linear: parse arguments, set up logging, load the
//! optional `.env` file, resolve the connection config, run one operation,
//! render, exit. Mutating commands print a status line and then re-list the
//! whole table as confirmation.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `logging`: `tracing` subscriber on stderr
//! - `render`: Bordered table and status messages
//! - `setup`: Argument parsing via clap

mod commands;
mod logging;
mod render;
pub mod setup;

pub use commands::run;
