//! # Rollcall Architecture
//!
//! Rollcall manages a PostgreSQL `students` table from the command line. The
//! crate is a small library with a CLI client on top of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses raw input (dates) into model types                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list, add, update_email, delete                          │
//! │  - Returns CmdResult with data and status messages          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StudentStore trait                                       │
//! │  - PgStore (production), InMemoryStore (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Connection parameters come from `PGHOST`, `PGPORT`, `PGUSER`,
//! `PGPASSWORD` and `PGDATABASE`, resolved once into a
//! [`config::ConnectionConfig`] and handed to the store.
//!
//! ## Testing Strategy
//!
//! Command logic is tested against `InMemoryStore`, which follows the same
//! ordering, id and uniqueness rules as the table. `PgStore` is exercised by
//! `tests/postgres_store.rs` when a database is configured.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Student`, `NewStudent`, date parsing
//! - [`config`]: Connection configuration and `.env` loading
//! - [`error`]: Error types
//! - `cli`: Argument parsing, logging setup and table rendering for the binary

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
