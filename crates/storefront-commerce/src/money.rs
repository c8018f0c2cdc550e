//! Money type for representing monetary values.
//!
//! Amounts are integers in the currency's smallest unit. The data store and
//! the URL parameters carry plain decimals, so conversions round to the
//! nearest minor unit at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Shorthand for a USD amount in cents.
    pub const fn usd(amount_cents: i64) -> Self {
        Self::new(amount_cents, Currency::USD)
    }

    /// Create a Money value from a decimal amount, rounding to the nearest
    /// minor unit.
    ///
    /// ```
    /// use storefront_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(299.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 29999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::from_scaled(amount, currency, f64::round)
    }

    /// Like [`from_decimal`](Self::from_decimal), but a fraction of a minor
    /// unit rounds up, so `99.991` becomes `100.00`.
    pub fn from_decimal_ceil(amount: f64, currency: Currency) -> Self {
        Self::from_scaled(amount, currency, f64::ceil)
    }

    /// Like [`from_decimal`](Self::from_decimal), but a fraction of a minor
    /// unit rounds down.
    pub fn from_decimal_floor(amount: f64, currency: Currency) -> Self {
        Self::from_scaled(amount, currency, f64::floor)
    }

    fn from_scaled(amount: f64, currency: Currency, round: fn(f64) -> f64) -> Self {
        let scaled = amount * currency.minor_per_major() as f64;
        let nearest = scaled.round();
        // Binary noise such as 99.99 * 100 = 9998.999... is not a fraction.
        let amount_cents = if (scaled - nearest).abs() < 1e-6 {
            nearest
        } else {
            round(scaled)
        };
        Self::new(amount_cents as i64, currency)
    }

    /// Parse a plain decimal string such as `"100"` or `"99.5"`.
    ///
    /// Returns `None` for anything that is not a finite number.
    pub fn parse_decimal(s: &str, currency: Currency) -> Option<Self> {
        Self::parse_decimal_with(s, currency, Self::from_decimal)
    }

    /// Parse a plain decimal string, converting it with `convert`.
    pub fn parse_decimal_with(
        s: &str,
        currency: Currency,
        convert: fn(f64, Currency) -> Self,
    ) -> Option<Self> {
        let value: f64 = s.trim().parse().ok()?;
        value.is_finite().then(|| convert(value, currency))
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_per_major() as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", self.to_decimal())
    }

    /// Compact decimal form used in query parameters: whole amounts drop
    /// their minor digits (`"100"`), others keep them (`"99.50"`).
    pub fn to_param(&self) -> String {
        let unit = self.currency.minor_per_major();
        if self.amount_cents % unit == 0 {
            (self.amount_cents / unit).to_string()
        } else {
            self.display_amount()
        }
    }

    /// Add another Money value, returning None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_cents.checked_add(other.amount_cents)?;
        Some(Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount_cents.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Calculate a percentage of this amount, rounded to the minor unit.
    pub fn percentage(&self, percent: f64) -> Money {
        let amount = (self.amount_cents as f64 * percent / 100.0).round() as i64;
        Money::new(amount, self.currency)
    }

    /// Sum Money values in one currency. None on mismatch or overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(299.99, Currency::USD).amount_cents, 29999);
        assert_eq!(Money::from_decimal(1299.99, Currency::USD).amount_cents, 129999);
        assert_eq!(Money::from_decimal(100.0, Currency::JPY).amount_cents, 100);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::usd(4999).display(), "$49.99");
        assert_eq!(Money::new(100, Currency::JPY).display(), "\u{00a5}100");
    }

    #[test]
    fn test_param_format() {
        assert_eq!(Money::usd(10000).to_param(), "100");
        assert_eq!(Money::usd(9950).to_param(), "99.50");
        assert_eq!(Money::usd(0).to_param(), "0");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(Money::parse_decimal("100", Currency::USD), Some(Money::usd(10000)));
        assert_eq!(Money::parse_decimal(" 99.5 ", Currency::USD), Some(Money::usd(9950)));
        assert_eq!(Money::parse_decimal("cheap", Currency::USD), None);
        assert_eq!(Money::parse_decimal("NaN", Currency::USD), None);
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::usd(1000);
        assert_eq!(a.try_add(&Money::usd(500)), Some(Money::usd(1500)));
        assert_eq!(a.try_multiply(3), Some(Money::usd(3000)));
        assert_eq!(Money::usd(i64::MAX).try_multiply(2), None);
        assert_eq!(a.try_add(&Money::new(1, Currency::EUR)), None);
    }

    #[test]
    fn test_directed_rounding() {
        assert_eq!(Money::from_decimal_floor(99.996, Currency::USD), Money::usd(9999));
        assert_eq!(Money::from_decimal_ceil(99.991, Currency::USD), Money::usd(10000));
        assert_eq!(Money::from_decimal(99.996, Currency::USD), Money::usd(10000));
        // Exact cents survive float representation in both directions.
        assert_eq!(Money::from_decimal_floor(99.99, Currency::USD), Money::usd(9999));
        assert_eq!(Money::from_decimal_ceil(0.29, Currency::USD), Money::usd(29));
    }

    #[test]
    fn test_percentage_rounds() {
        // 7% of $12.35 = 86.45 cents
        assert_eq!(Money::usd(1235).percentage(7.0), Money::usd(86));
        assert_eq!(Money::usd(10000).percentage(10.0), Money::usd(1000));
    }

    #[test]
    fn test_try_sum() {
        let values = [Money::usd(100), Money::usd(250)];
        assert_eq!(Money::try_sum(values.iter(), Currency::USD), Some(Money::usd(350)));
        let mixed = [Money::usd(100), Money::new(1, Currency::GBP)];
        assert_eq!(Money::try_sum(mixed.iter(), Currency::USD), None);
    }
}
