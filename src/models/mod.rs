//! Core data models for the expenses CLI

pub mod expense;
pub mod money;

pub use expense::{Expense, NewExpense};
pub use money::{Money, MoneyParseError, MoneyTotal};
