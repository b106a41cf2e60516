//! Amount type for ledger entries
//!
//! Amounts are stored as plain JSON numbers in the ledger file, so the
//! newtype wraps an `f64`. Whole amounts are written back as integers, which
//! keeps `5000` in an existing file from turning into `5000.0` on resave.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

// Largest magnitude at which every integer is exactly representable in f64
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A monetary amount in the ledger's single currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    ///
    /// # Examples
    /// ```
    /// use wallet::models::Amount;
    /// let amount = Amount::new(1500.0);
    /// assert_eq!(amount.value(), 1500.0);
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Format with a trailing currency label, e.g. `5000.00 руб.`
    pub fn format_with_label(&self, label: &str) -> String {
        if label.is_empty() {
            self.to_string()
        } else {
            format!("{} {}", self, label)
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0.abs() < MAX_EXACT_INTEGER {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    /// Parse a decimal amount such as `1500`, `1500.50` or `-20`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::NotFinite(trimmed.to_string()));
        }

        Ok(Self(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + *a)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountParseError {
    #[error("Invalid amount: {0}")]
    InvalidFormat(String),
    #[error("Amount must be a finite number: {0}")]
    NotFinite(String),
}
