//! CLI dispatcher
//!
//! Maps the first command-line token to a `CommandHandler` method and hands
//! over the remaining tokens untouched. Unknown commands, no command, and
//! anything clap refuses all print the help text.

pub mod expense;
pub mod prompt;

pub use expense::CommandHandler;
pub use prompt::{Prompt, ScriptedPrompt, TerminalPrompt};

use std::ffi::OsString;
use std::io::Write;

use clap::{Parser, Subcommand};

use crate::error::ExpenseResult;
use crate::storage::ExpenseRepository;

/// Command summary shown for unrecognized or missing commands
pub const HELP_TEXT: &str = "An expense recording system

Commands:

add AMOUNT MEMO - record a new expense
clear - delete all expenses
list - list all expenses
delete NUMBER - remove expense with id NUMBER
search QUERY - list expenses with a matching memo field
";

#[derive(Parser, Debug)]
#[command(
    name = "expenses",
    about = "An expense recording system",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands; arguments are validated by the handler, not here
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List all expenses
    #[command(disable_help_flag = true)]
    List {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        args: Vec<String>,
    },

    /// Record a new expense
    #[command(disable_help_flag = true)]
    Add {
        /// AMOUNT MEMO
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List expenses with a matching memo field
    #[command(disable_help_flag = true)]
    Search {
        /// QUERY
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Remove the expense with the given id
    #[command(disable_help_flag = true)]
    Delete {
        /// NUMBER
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Delete all expenses
    #[command(disable_help_flag = true)]
    Clear {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        args: Vec<String>,
    },

    #[command(external_subcommand)]
    Other(Vec<String>),
}

/// Parse a full argument list (program name first) into a command
///
/// Returns `None` when no known command was given.
pub fn parse_command<I, T>(args: I) -> Option<Commands>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => cli.command,
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "unparseable arguments");
            None
        }
    }
}

/// Run the handler method for `command`
pub fn dispatch<R, P, W>(
    command: Option<Commands>,
    handler: &mut CommandHandler<R, P, W>,
) -> ExpenseResult<()>
where
    R: ExpenseRepository,
    P: Prompt,
    W: Write,
{
    match command {
        Some(Commands::List { .. }) => handler.list(),
        Some(Commands::Add { args }) => handler.add(&args),
        Some(Commands::Search { args }) => handler.search(&args),
        Some(Commands::Delete { args }) => handler.delete(&args),
        Some(Commands::Clear { .. }) => handler.clear(),
        Some(Commands::Other(_)) | None => handler.help(),
    }
}

/// Parse `args` and run the matching command
pub fn run<I, T, R, P, W>(args: I, handler: &mut CommandHandler<R, P, W>) -> ExpenseResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: ExpenseRepository,
    P: Prompt,
    W: Write,
{
    dispatch(parse_command(args), handler)
}
