//! Display formatting for terminal output

pub mod expense;

pub use expense::{format_count, format_expense_row, format_expenses, format_total};
