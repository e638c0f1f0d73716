//! # Rollcall CLI
//!
//! The binary is thin: the CLI lives in `cli/`, and this file only invokes
//! `cli::run()` and turns a runtime error into `ERROR: <message>` on stderr
//! with exit status 1.
//!
//! Argument errors never get here. clap reports them itself (usage text,
//! exit status 2) before any connection is attempted.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}
