//! Expense model
//!
//! An expense is immutable once stored: it can be read or deleted, never
//! updated.

use chrono::NaiveDate;

use super::money::Money;

/// A recorded monetary outlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Store-assigned identifier, increasing with each insert
    pub id: i64,

    /// Amount with exactly two decimal digits
    pub amount: Money,

    /// Free-text description
    pub memo: String,

    /// Calendar date the expense was recorded
    pub created_on: NaiveDate,
}

impl Expense {
    /// Create an expense with all fields given
    pub fn new(id: i64, amount: Money, memo: impl Into<String>, created_on: NaiveDate) -> Self {
        Self {
            id,
            amount,
            memo: memo.into(),
            created_on,
        }
    }
}

/// Validated input for a new expense
///
/// Construction enforces the storage invariants: a non-zero amount and a
/// non-empty memo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    amount: Money,
    memo: String,
}

impl NewExpense {
    /// Parse raw command-line values into a new expense
    ///
    /// Returns `None` when the amount is not a number, rounds to zero, or the
    /// memo is empty.
    pub fn parse(amount: &str, memo: &str) -> Option<Self> {
        let amount = Money::parse(amount).ok().filter(|m| !m.is_zero())?;
        if memo.is_empty() {
            return None;
        }

        Some(Self {
            amount,
            memo: memo.to_string(),
        })
    }

    /// The rounded amount
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// The memo, verbatim
    pub fn memo(&self) -> &str {
        &self.memo
    }
}
