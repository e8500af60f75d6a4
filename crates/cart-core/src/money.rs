//! # Money
//!
//! Amounts are kept in integer cents so that summing line totals is exact.
//! Product costs arrive as display strings ("$15.00") and are turned into
//! numbers by [`parse_currency`], which never fails.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// An amount in cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Zero amount
    pub const ZERO: Money = Money { cents: 0 };

    /// Create from cents
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create from a decimal amount, rounding to the nearest cent
    pub fn from_decimal(amount: f64) -> Self {
        if !amount.is_finite() {
            return Self::ZERO;
        }
        Self {
            cents: (amount * 100.0).round() as i64,
        }
    }

    /// Amount in cents
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Format for display with a dollar sign (e.g., "$25.50")
    pub fn display(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        format!("{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Two-decimal amount without a currency symbol (e.g., "25.50")
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::from_cents(self.cents.saturating_add(rhs.cents))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Parse a currency-formatted cost string into a number.
///
/// Every character that is not an ASCII digit or `.` is stripped, then the
/// longest leading decimal number (`digits[.digits]`) is parsed. Anything that
/// does not yield a finite number parses as `0.0`.
///
/// ```
/// use cart_core::parse_currency;
///
/// assert_eq!(parse_currency("$15.00"), 15.0);
/// assert_eq!(parse_currency("$1,299.99"), 1299.99);
/// assert_eq!(parse_currency("$abc"), 0.0);
/// ```
pub fn parse_currency(cost: &str) -> f64 {
    let cleaned: String = cost
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    leading_decimal(&cleaned)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Longest prefix of the form `digits[.digits]`; a second dot ends it.
fn leading_decimal(cleaned: &str) -> &str {
    let mut seen_dot = false;
    let end = cleaned
        .char_indices()
        .find(|&(_, c)| {
            if c == '.' {
                if seen_dot {
                    return true;
                }
                seen_dot = true;
            }
            false
        })
        .map(|(idx, _)| idx)
        .unwrap_or(cleaned.len());
    &cleaned[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("$15.00"), 15.0);
        assert_eq!(parse_currency("$5.50"), 5.5);
        assert_eq!(parse_currency("12"), 12.0);
        assert_eq!(parse_currency("USD 7.25"), 7.25);
        assert_eq!(parse_currency(".5"), 0.5);
    }

    #[test]
    fn test_parse_currency_fallbacks() {
        assert_eq!(parse_currency(""), 0.0);
        assert_eq!(parse_currency("$abc"), 0.0);
        assert_eq!(parse_currency("."), 0.0);
        assert_eq!(parse_currency("free"), 0.0);
    }

    #[test]
    fn test_parse_currency_stops_at_second_dot() {
        assert_eq!(parse_currency("1.2.3"), 1.2);
        // "10.0012.00" after stripping
        assert_eq!(parse_currency("$10.00 (was $12.00)"), 10.0012);
    }

    #[test]
    fn test_money_formatting() {
        assert_eq!(Money::from_cents(2550).to_string(), "25.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::from_cents(1500).display(), "$15.00");
        assert_eq!(Money::from_cents(-250).display(), "-$2.50");
    }

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(10.99).cents(), 1099);
        assert_eq!(Money::from_decimal(16.5).cents(), 1650);
        assert_eq!(Money::from_decimal(f64::NAN), Money::ZERO);
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [2000, 550, 1].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 2551);
    }

    #[test]
    fn test_display_extremes() {
        assert_eq!(Money::from_cents(i64::MIN).display(), "-$92233720368547758.08");
        assert_eq!(Money::from_cents(i64::MAX).display(), "$92233720368547758.07");
    }

    #[test]
    fn test_half_cent_rounding() {
        assert_eq!(Money::from_decimal(0.015).to_string(), "0.02");
        assert_eq!(Money::from_decimal(0.125).to_string(), "0.13");
    }
}
