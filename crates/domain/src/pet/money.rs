//! Decimal monetary values.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use bigdecimal::{BigDecimal, Signed, ToPrimitive};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};

/// A decimal amount of money.
///
/// Equality is by value, so `249.9` and `249.90` compare equal. Accepts JSON
/// numbers or numeric strings and always serializes as a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(BigDecimal);

impl Money {
    /// Wraps a decimal value.
    #[must_use]
    pub const fn new(value: BigDecimal) -> Self {
        Self(value)
    }

    /// Parses a decimal string such as `"249.99"`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMoney` if the text is not a decimal.
    pub fn parse(text: &str) -> DomainResult<Self> {
        BigDecimal::from_str(text.trim())
            .map(Self)
            .map_err(|_| DomainError::InvalidMoney(text.to_string()))
    }

    /// Returns the underlying decimal.
    #[must_use]
    pub const fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Returns true for amounts below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Absolute difference between two amounts.
    #[must_use]
    pub fn distance(&self, other: &Self) -> Self {
        Self((&self.0 - &other.0).abs())
    }

    /// Renders the amount rounded to `places` decimal places (`"299.99"`).
    #[must_use]
    pub fn to_fixed(&self, places: i64) -> String {
        self.0.round(places).with_scale(places).to_string()
    }

    /// Lossy conversion used when a JSON number is required.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::parse(s)
    }
}

impl Add for &Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Money {
        Money(&self.0 + &rhs.0)
    }
}

impl Sub for &Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Money {
        Money(&self.0 - &rhs.0)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.to_f64() {
            Some(value) if value.is_finite() => serializer.serialize_f64(value),
            _ => serializer.serialize_str(&self.0.to_string()),
        }
    }
}

/// Accepted wire forms of a money value.
#[derive(Deserialize)]
#[serde(untagged)]
enum MoneyRepr {
    Number(serde_json::Number),
    Text(String),
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rendered = match MoneyRepr::deserialize(deserializer)? {
            MoneyRepr::Number(number) => number.to_string(),
            MoneyRepr::Text(text) => text,
        };
        Self::parse(&rendered).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(Money::parse("249.9").unwrap(), Money::parse("249.90").unwrap());
        assert_ne!(Money::parse("249.9").unwrap(), Money::parse("249.99").unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(Money::parse("ten"), Err(DomainError::InvalidMoney(_))));
    }

    #[test]
    fn test_addition_and_fixed_rendering() {
        let cost = Money::parse("249.99").unwrap();
        let delta = Money::parse("50").unwrap();
        assert_eq!((&cost + &delta).to_fixed(2), "299.99");
        assert_eq!(Money::parse("300").unwrap().to_fixed(2), "300.00");
    }

    #[test]
    fn test_negative_and_distance() {
        let a = Money::parse("-10.00").unwrap();
        assert!(a.is_negative());
        assert!(!Money::parse("0").unwrap().is_negative());
        let d = Money::parse("1.005").unwrap().distance(&Money::parse("1.000").unwrap());
        assert_eq!(d, Money::parse("0.005").unwrap());
    }

    #[test]
    fn test_deserialize_number_and_string() {
        let from_number: Money = serde_json::from_str("249.99").unwrap();
        let from_string: Money = serde_json::from_str("\"249.99\"").unwrap();
        assert_eq!(from_number, from_string);
        assert!(serde_json::from_str::<Money>("true").is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Money::parse("249.99").unwrap()).unwrap();
        assert_eq!(json, "249.99");
    }
}
