use std::io;

use anyhow::Result;

use expenses_cli::cli::{run, CommandHandler, TerminalPrompt};
use expenses_cli::config::{paths::ExpensePaths, settings::Settings};
use expenses_cli::logging;
use expenses_cli::storage::{ExpenseRepository, SqliteStorage};

fn main() -> Result<()> {
    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    logging::init(&settings.log_level);

    // Open the database and make sure the expenses table exists
    paths.ensure_directories()?;
    let storage = SqliteStorage::open(paths.database_file(&settings.database_name))?;
    storage.ensure_schema()?;

    let stdout = io::stdout();
    let mut handler = CommandHandler::new(storage, TerminalPrompt::new(), stdout.lock());
    run(std::env::args_os(), &mut handler)?;

    Ok(())
}
