//! SQLite-backed expense repository
//!
//! Every statement binds its values as parameters.

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::ExpenseError;
use crate::models::{Expense, Money};

use super::init;
use super::ExpenseRepository;

const SELECT_COLUMNS: &str = "SELECT id, amount, memo, created_on FROM expenses";

/// SQL function lowercasing the full Unicode range; SQLite's `lower()`
/// only folds ASCII
const UNICODE_LOWER: &str = "unicode_lower";

/// Repository over a single SQLite connection
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open (or create) the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ExpenseError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening database");
        Self::with_connection(Connection::open(path)?)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self, ExpenseError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, ExpenseError> {
        conn.create_scalar_function(
            UNICODE_LOWER,
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| Ok(ctx.get::<String>(0)?.to_lowercase()),
        )?;
        Ok(Self { conn })
    }

    fn query_expenses<P: rusqlite::Params>(
        &self,
        sql: &str,
        params: P,
    ) -> Result<Vec<Expense>, ExpenseError> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, map_row)?;
        let expenses = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(expenses)
    }
}

/// Map one result row onto an Expense by column name
fn map_row(row: &Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense::new(
        row.get("id")?,
        Money::from_cents(row.get("amount")?),
        row.get::<_, String>("memo")?,
        row.get("created_on")?,
    ))
}

impl ExpenseRepository for SqliteStorage {
    fn ensure_schema(&self) -> Result<(), ExpenseError> {
        init::ensure_schema(&self.conn)?;
        Ok(())
    }

    fn insert(&self, amount: Money, memo: &str, date: NaiveDate) -> Result<(), ExpenseError> {
        self.conn.execute(
            "INSERT INTO expenses (amount, memo, created_on) VALUES (?1, ?2, ?3)",
            params![amount.cents(), memo, date],
        )?;
        tracing::debug!(id = self.conn.last_insert_rowid(), "inserted expense");
        Ok(())
    }

    fn delete_by_id(&self, id: i64) -> Result<(), ExpenseError> {
        let removed = self
            .conn
            .execute("DELETE FROM expenses WHERE id = ?1", params![id])?;
        tracing::debug!(id, removed, "deleted expense");
        Ok(())
    }

    fn delete_all(&self) -> Result<(), ExpenseError> {
        let removed = self.conn.execute("DELETE FROM expenses", [])?;
        tracing::debug!(removed, "deleted all expenses");
        Ok(())
    }

    fn fetch_by_id(&self, id: i64) -> Result<Option<Expense>, ExpenseError> {
        let expense = self
            .conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id],
                map_row,
            )
            .optional()?;
        Ok(expense)
    }

    fn fetch_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        self.query_expenses(&format!("{} ORDER BY id", SELECT_COLUMNS), params![])
    }

    fn search(&self, substring: &str) -> Result<Vec<Expense>, ExpenseError> {
        // instr() matches the term literally; LIKE would treat % and _ as wildcards.
        self.query_expenses(
            &format!(
                "{select} WHERE instr({lower}(memo), {lower}(?1)) > 0 ORDER BY id",
                select = SELECT_COLUMNS,
                lower = UNICODE_LOWER
            ),
            params![substring],
        )
    }

    fn exists(&self, id: i64) -> Result<bool, ExpenseError> {
        let found: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM expenses WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;
        Ok(found)
    }
}
