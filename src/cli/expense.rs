//! Expense command handler
//!
//! Validates raw arguments, calls the repository, and writes rendered text
//! to the output. Bad user input is reported as a message, never as an error.

use std::io::Write;

use chrono::{Local, NaiveDate};

use crate::display::format_expenses;
use crate::error::ExpenseResult;
use crate::models::NewExpense;
use crate::storage::ExpenseRepository;

use super::prompt::Prompt;
use super::HELP_TEXT;

const ADD_USAGE: &str = "You must provide an amount and memo.";
const CLEAR_PROMPT: &str = "This will remove all expenses. Are you sure? (y/n)";

/// Executes one user command against a repository
pub struct CommandHandler<R, P, W> {
    repository: R,
    prompt: P,
    out: W,
}

impl<R, P, W> CommandHandler<R, P, W>
where
    R: ExpenseRepository,
    P: Prompt,
    W: Write,
{
    pub fn new(repository: R, prompt: P, out: W) -> Self {
        Self {
            repository,
            prompt,
            out,
        }
    }

    /// Record a new expense dated today
    ///
    /// Expects exactly `[AMOUNT, MEMO]`.
    pub fn add(&mut self, args: &[String]) -> ExpenseResult<()> {
        self.add_on(args, Local::now().date_naive())
    }

    fn add_on(&mut self, args: &[String], date: NaiveDate) -> ExpenseResult<()> {
        let new_expense = match args {
            [amount, memo] => NewExpense::parse(amount, memo),
            _ => None,
        };

        let Some(new_expense) = new_expense else {
            tracing::debug!(?args, "rejected add");
            writeln!(self.out, "{}", ADD_USAGE)?;
            return Ok(());
        };

        self.repository
            .insert(new_expense.amount(), new_expense.memo(), date)?;
        tracing::info!(amount = %new_expense.amount(), "expense added");
        writeln!(self.out, "The expense has been added.")?;
        Ok(())
    }

    /// Show every expense with a total
    pub fn list(&mut self) -> ExpenseResult<()> {
        let expenses = self.repository.fetch_all()?;
        write!(self.out, "{}", format_expenses(&expenses, true))?;
        Ok(())
    }

    /// Show expenses whose memo contains the first argument, with a total
    ///
    /// A missing term matches everything.
    pub fn search(&mut self, args: &[String]) -> ExpenseResult<()> {
        let term = args.first().map(String::as_str).unwrap_or("");
        let expenses = self.repository.search(term)?;
        write!(self.out, "{}", format_expenses(&expenses, true))?;
        Ok(())
    }

    /// Show, then remove, the expense whose id is the first argument
    pub fn delete(&mut self, args: &[String]) -> ExpenseResult<()> {
        let raw_id = args.first().map(String::as_str).unwrap_or("");

        let expense = match raw_id.trim().parse::<i64>() {
            Ok(id) if self.repository.exists(id)? => self.repository.fetch_by_id(id)?,
            _ => None,
        };

        let Some(expense) = expense else {
            writeln!(self.out, "There is no expense with the id '{}'", raw_id)?;
            return Ok(());
        };

        writeln!(self.out, "The following expense has been deleted:")?;
        write!(
            self.out,
            "{}",
            format_expenses(std::slice::from_ref(&expense), false)
        )?;
        self.out.flush()?;

        self.repository.delete_by_id(expense.id)?;
        tracing::info!(id = expense.id, "expense deleted");
        Ok(())
    }

    /// Remove every expense after a y/n confirmation
    pub fn clear(&mut self) -> ExpenseResult<()> {
        writeln!(self.out, "{}", CLEAR_PROMPT)?;
        self.out.flush()?;

        let answer = self.prompt.read_char()?;
        if !matches!(answer, Some('y') | Some('Y')) {
            tracing::debug!(?answer, "clear declined");
            return Ok(());
        }

        self.repository.delete_all()?;
        tracing::info!("all expenses deleted");
        writeln!(self.out, "All expenses have been deleted.")?;
        Ok(())
    }

    /// Print the command summary
    pub fn help(&mut self) -> ExpenseResult<()> {
        write!(self.out, "{}", HELP_TEXT)?;
        Ok(())
    }
}
