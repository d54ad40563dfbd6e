//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) so every stored amount has
//! exactly two decimal digits. Parsing accepts any decimal number and rounds
//! it to the nearest cent. Totals accumulate in a wider `MoneyTotal`, since
//! a handful of very large amounts can exceed `i64` cents.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expenses_cli::models::Money;
    /// let amount = Money::from_cents(1050);
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse a money amount from a string, rounding to the nearest cent
    ///
    /// Accepts plain decimal numbers: "10.50", "-10.5", "10", "3.14159".
    /// Halfway values round away from zero, so "0.005" becomes "0.01".
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let value = Decimal::from_str(trimmed)
            .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

        let cents = value
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|c| c.to_i64())
            .ok_or_else(|| MoneyParseError::OutOfRange(trimmed.to_string()))?;

        Ok(Self(cents))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_cents(i128::from(self.0)))
    }
}

/// Exact sum of any number of `Money` amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoneyTotal(i128);

impl MoneyTotal {
    /// Get the total in cents
    pub const fn cents(&self) -> i128 {
        self.0
    }
}

impl fmt::Display for MoneyTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_cents(self.0))
    }
}

impl<'a> std::iter::Sum<&'a Money> for MoneyTotal {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        Self(iter.map(|m| i128::from(m.0)).sum())
    }
}

/// Render cents as `<sign><units>.<cents>` with no currency symbol
fn format_cents(cents: i128) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
        assert_eq!(format!("{}", Money::from_cents(-5)), "-0.05");
        assert_eq!(
            format!("{}", Money::from_cents(i64::MIN)),
            "-92233720368547758.08"
        );
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(format!("{:>8}", Money::from_cents(550)), "    5.50");
        assert_eq!(format!("{:>3}", Money::from_cents(123456)), "1234.56");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(" 0.05 ").unwrap().cents(), 5);
    }

    #[test]
    fn test_parse_rounds_to_cents() {
        assert_eq!(Money::parse("3.14159").unwrap().cents(), 314);
        assert_eq!(Money::parse("2.675").unwrap().cents(), 268);
        assert_eq!(Money::parse("0.005").unwrap().cents(), 1);
        assert_eq!(Money::parse("-0.005").unwrap().cents(), -1);
        assert!(Money::parse("0.004").unwrap().is_zero());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Money::parse("abc"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(Money::parse("").is_err());
        assert!(Money::parse("12.50abc").is_err());
        assert!(matches!(
            Money::parse("99999999999999999999999"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_total() {
        let amounts = [
            Money::from_cents(1200),
            Money::from_cents(550),
            Money::from_cents(-50),
        ];
        let total: MoneyTotal = amounts.iter().sum();
        assert_eq!(total.cents(), 1700);
        assert_eq!(total.to_string(), "17.00");
        assert_eq!(format!("{:>8}", total), "   17.00");
    }

    #[test]
    fn test_total_of_empty_is_zero() {
        let empty: [Money; 0] = [];
        let total: MoneyTotal = empty.iter().sum();
        assert_eq!(total.to_string(), "0.00");
    }

    #[test]
    fn test_total_exceeding_i64_cents() {
        let big = Money::parse("90000000000000000").unwrap();
        let total: MoneyTotal = [big, big].iter().sum();
        assert_eq!(total.cents(), 18_000_000_000_000_000_000);
        assert_eq!(total.to_string(), "180000000000000000.00");

        let most_negative = Money::from_cents(i64::MIN);
        let negative: MoneyTotal = [most_negative, most_negative].iter().sum();
        assert_eq!(negative.to_string(), "-184467440737095516.16");
    }
}
