//! Storage layer for the expenses CLI
//!
//! The `ExpenseRepository` trait is the only way the rest of the crate
//! reaches persisted expenses. `SqliteStorage` implements it over a single
//! SQLite connection.

pub mod expenses;
pub mod init;

pub use expenses::SqliteStorage;
pub use init::{ensure_schema, table_exists, EXPENSES_TABLE, SCHEMA_SQL};

use chrono::NaiveDate;

use crate::error::ExpenseError;
use crate::models::{Expense, Money};

/// Parameterized operations on the `expenses` table
///
/// Any error returned here is a store fault and is not retried.
pub trait ExpenseRepository {
    /// Create the expenses table if the catalog doesn't list it
    fn ensure_schema(&self) -> Result<(), ExpenseError>;

    /// Append one expense; the caller guarantees a non-zero amount and a
    /// non-empty memo
    fn insert(&self, amount: Money, memo: &str, date: NaiveDate) -> Result<(), ExpenseError>;

    /// Remove the expense with `id`, if any
    fn delete_by_id(&self, id: i64) -> Result<(), ExpenseError>;

    /// Remove every expense
    fn delete_all(&self) -> Result<(), ExpenseError>;

    /// Get one expense by id
    fn fetch_by_id(&self, id: i64) -> Result<Option<Expense>, ExpenseError>;

    /// Get all expenses in id order
    fn fetch_all(&self) -> Result<Vec<Expense>, ExpenseError>;

    /// Get expenses whose memo contains `substring`, ignoring case, in id order
    fn search(&self, substring: &str) -> Result<Vec<Expense>, ExpenseError>;

    /// Check whether an expense with `id` exists
    fn exists(&self, id: i64) -> Result<bool, ExpenseError>;
}
