//! Rupee amounts with display formatting.
//!
//! The store operates in INR. Amounts travel as plain decimals on the wire;
//! this type exists for rendering them the way the storefront does, with
//! Indian digit grouping (lakh/crore): `₹3,75,000.00`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An INR amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price from a decimal rupee amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format with two decimal places, e.g. `₹3,750.00`.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self.0.round_dp(2);
        let mut abs = rounded.abs();
        abs.rescale(2);
        let formatted = abs.to_string();
        let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));
        let grouped = group_indian(int_part);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-₹{grouped}.{frac_part}")
        } else {
            format!("₹{grouped}.{frac_part}")
        }
    }

    /// Format rounded to whole rupees, e.g. `₹3,750`.
    #[must_use]
    pub fn display_whole(&self) -> String {
        let rounded = self.0.round_dp(0);
        let mut abs = rounded.abs();
        abs.rescale(0);
        let grouped = group_indian(&abs.to_string());
        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-₹{grouped}")
        } else {
            format!("₹{grouped}")
        }
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// Indian digit grouping: the last three digits form one group, everything
/// before that is grouped in pairs (`12345678` -> `1,23,45,678`).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut pairs = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        pairs.push(pair);
        rest = front;
    }
    pairs.push(rest);
    pairs.reverse();
    format!("{},{}", pairs.join(","), tail)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn price(s: &str) -> Price {
        Price::new(s.parse::<Decimal>().unwrap())
    }

    #[test]
    fn test_display_small_amounts() {
        assert_eq!(price("0").display(), "₹0.00");
        assert_eq!(price("42.5").display(), "₹42.50");
        assert_eq!(price("999").display(), "₹999.00");
    }

    #[test]
    fn test_display_thousands() {
        assert_eq!(price("3750").display(), "₹3,750.00");
        assert_eq!(price("12345.67").display(), "₹12,345.67");
    }

    #[test]
    fn test_display_lakh_and_crore_grouping() {
        assert_eq!(price("375000").display(), "₹3,75,000.00");
        assert_eq!(price("12345678.5").display(), "₹1,23,45,678.50");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(price("-1234").display(), "-₹1,234.00");
    }

    #[test]
    fn test_display_rounds_to_paise() {
        assert_eq!(price("19.999").display(), "₹20.00");
    }

    #[test]
    fn test_display_whole() {
        assert_eq!(price("375000.75").display_whole(), "₹3,75,001");
        assert_eq!(price("3750").display_whole(), "₹3,750");
    }
}
