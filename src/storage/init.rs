//! Schema initialization
//!
//! Detects the `expenses` table through the SQLite catalog and creates it
//! from `schema.sql` when missing.

use rusqlite::{params, Connection};

use crate::error::ExpenseError;

/// Name of the table holding every expense
pub const EXPENSES_TABLE: &str = "expenses";

/// Schema creation script, shipped alongside the program
pub const SCHEMA_SQL: &str = include_str!("../../schema.sql");

/// Check the catalog for a table called `name`
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool, ExpenseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        params![name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Create the expenses table unless it already exists
///
/// Returns `true` when the schema script ran.
pub fn ensure_schema(conn: &Connection) -> Result<bool, ExpenseError> {
    if table_exists(conn, EXPENSES_TABLE)? {
        return Ok(false);
    }

    tracing::debug!(table = EXPENSES_TABLE, "creating table from schema script");
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(true)
}
