//! # Price
//!
//! Non-negative decimal money amount.

use crate::domain::value_objects::arithmetic::{ArithmeticError, ArithmeticResult, round_currency};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A non-negative price.
///
/// Serialized as a JSON number, which is what quote consumers display.
///
/// # Examples
///
/// ```
/// use hauze_quote::domain::value_objects::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(1999, 2)).unwrap();
/// assert_eq!(price.to_string(), "19.99");
/// assert!(Price::new(Decimal::NEGATIVE_ONE).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Price(Decimal);

impl Price {
    /// Creates a price, rejecting negative amounts.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::InvalidValue` if `amount` is negative.
    pub fn new(amount: Decimal) -> ArithmeticResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ArithmeticError::InvalidValue("price must be non-negative"));
        }
        Ok(Self(amount))
    }

    /// Creates a price from an arbitrary amount, flooring negatives at zero.
    #[must_use]
    pub fn clamped(amount: Decimal) -> Self {
        Self(amount.max(Decimal::ZERO))
    }

    /// Returns a zero price.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns the price rounded to currency precision.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self(round_currency(self.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}
