//! Expense display formatting
//!
//! Renders expenses as the fixed-width table shared by `list`, `search`
//! and `delete`.

use crate::models::{Expense, MoneyTotal};

/// Width of the separator line above the total
const SEPARATOR_WIDTH: usize = 50;

/// Width of the right-justified total after the "Total" label
const TOTAL_WIDTH: usize = 26;

/// Sentence announcing how many expenses follow
pub fn format_count(count: usize) -> String {
    match count {
        0 => "There are no expenses.".to_string(),
        1 => "There is 1 expense.".to_string(),
        n => format!("There are {} expenses.", n),
    }
}

/// Format one expense as a table row
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:>3} | {:>10} | {:>12} | {}",
        expense.id,
        expense.created_on.format("%Y-%m-%d").to_string(),
        expense.amount,
        expense.memo
    )
}

/// Format the separator and total lines
pub fn format_total(expenses: &[Expense]) -> String {
    let total: MoneyTotal = expenses.iter().map(|e| &e.amount).sum();
    format!(
        "{}\nTotal{:>width$}\n",
        "-".repeat(SEPARATOR_WIDTH),
        total,
        width = TOTAL_WIDTH
    )
}

/// Format a set of expenses with a count line and, optionally, a total
///
/// The output starts and ends with a blank line. The total is only shown
/// when requested and there is at least one expense.
pub fn format_expenses(expenses: &[Expense], with_total: bool) -> String {
    let mut output = String::from("\n");

    output.push_str(&format_count(expenses.len()));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    if with_total && !expenses.is_empty() {
        output.push_str(&format_total(expenses));
    }

    output.push('\n');
    output
}
