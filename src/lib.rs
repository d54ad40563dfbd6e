//! Expenses CLI - a command-line expense tracker
//!
//! Records, lists, searches, deletes and clears expenses kept in a SQLite
//! `expenses` table.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: The `Expense` record and `Money` amounts
//! - `storage`: Schema check and parameterized queries
//! - `display`: Table rendering with counts and totals
//! - `cli`: Command dispatch, the command handler, and confirmation prompts
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust,no_run
//! use expenses_cli::cli::{run, CommandHandler, TerminalPrompt};
//! use expenses_cli::storage::{ExpenseRepository, SqliteStorage};
//!
//! # fn main() -> Result<(), expenses_cli::ExpenseError> {
//! let storage = SqliteStorage::open("expenses.db")?;
//! storage.ensure_schema()?;
//! let mut handler = CommandHandler::new(storage, TerminalPrompt::new(), std::io::stdout());
//! run(["expenses", "list"], &mut handler)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod storage;

pub use error::ExpenseError;
