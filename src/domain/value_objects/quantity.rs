//! # Quantity
//!
//! Positive whole order quantity, with normalization of caller input.
//!
//! Callers send `quantity` as an arbitrary JSON value (or omit it). Under the
//! tolerant policy an absent or non-numeric value means one unit, fractions
//! are truncated and anything below one is raised to one. The strict policy
//! rejects all of those instead. Values that do not fit in a `u32` are
//! rejected under both.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::enums::QuantityPolicy;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A quantity as the caller sent it, before normalization.
///
/// Deserializes from any value: numbers and numeric strings become
/// [`RequestedQuantity::Amount`], `null` becomes [`RequestedQuantity::Absent`]
/// and everything else becomes [`RequestedQuantity::Invalid`]. Numbers beyond
/// the decimal range saturate to `Decimal::MAX` or `Decimal::MIN`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestedQuantity {
    /// No quantity was sent.
    #[default]
    Absent,
    /// A numeric quantity, not yet checked.
    Amount(Decimal),
    /// A value that is not a number.
    Invalid,
}

impl RequestedQuantity {
    fn from_float(value: f64) -> Self {
        if !value.is_finite() {
            return Self::Invalid;
        }
        Self::Amount(Decimal::from_f64(value).unwrap_or(if value.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }))
    }
}

impl From<Option<Decimal>> for RequestedQuantity {
    fn from(raw: Option<Decimal>) -> Self {
        raw.map_or(Self::Absent, Self::Amount)
    }
}

impl From<Decimal> for RequestedQuantity {
    fn from(raw: Decimal) -> Self {
        Self::Amount(raw)
    }
}

impl Serialize for RequestedQuantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Amount(amount) => rust_decimal::serde::float::serialize(amount, serializer),
            Self::Absent | Self::Invalid => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for RequestedQuantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RequestedQuantityVisitor)
    }
}

struct RequestedQuantityVisitor;

impl<'de> Visitor<'de> for RequestedQuantityVisitor {
    type Value = RequestedQuantity;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a quantity")
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(RequestedQuantity::Invalid)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(RequestedQuantity::Amount(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(RequestedQuantity::Amount(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(RequestedQuantity::from_float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(v.trim()
            .parse::<Decimal>()
            .map_or(RequestedQuantity::Invalid, RequestedQuantity::Amount))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RequestedQuantity::Absent)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RequestedQuantity::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RequestedQuantity::Invalid)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(RequestedQuantity::Invalid)
    }
}

/// A positive order quantity.
///
/// # Examples
///
/// ```
/// use hauze_quote::domain::value_objects::{Quantity, enums::QuantityPolicy};
/// use rust_decimal::Decimal;
///
/// let q = Quantity::normalize(Some(Decimal::new(-3, 0)), QuantityPolicy::Tolerant).unwrap();
/// assert_eq!(q, Quantity::ONE);
///
/// assert!(Quantity::normalize(Some(Decimal::ZERO), QuantityPolicy::Strict).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(1);

    /// Creates a quantity, returning `None` for zero.
    #[must_use]
    pub const fn new(units: u32) -> Option<Self> {
        if units == 0 { None } else { Some(Self(units)) }
    }

    /// Normalizes a caller-supplied quantity according to `policy`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if the value exceeds `u32::MAX`,
    /// or, under [`QuantityPolicy::Strict`], if it is absent, fractional or
    /// not positive.
    pub fn normalize(raw: Option<Decimal>, policy: QuantityPolicy) -> DomainResult<Self> {
        Self::resolve(raw.into(), policy)
    }

    /// Normalizes a quantity as the caller sent it.
    ///
    /// Non-numeric input is treated like an absent quantity.
    ///
    /// # Errors
    ///
    /// Same as [`Quantity::normalize`], and under [`QuantityPolicy::Strict`]
    /// also for [`RequestedQuantity::Invalid`].
    pub fn resolve(requested: RequestedQuantity, policy: QuantityPolicy) -> DomainResult<Self> {
        let raw = match (requested, policy) {
            (RequestedQuantity::Amount(raw), _) => raw,
            (RequestedQuantity::Absent | RequestedQuantity::Invalid, QuantityPolicy::Tolerant) => {
                return Ok(Self::ONE);
            }
            (RequestedQuantity::Absent, QuantityPolicy::Strict) => {
                return Err(DomainError::invalid_quantity("quantity is required"));
            }
            (RequestedQuantity::Invalid, QuantityPolicy::Strict) => {
                return Err(DomainError::invalid_quantity("quantity must be a number"));
            }
        };

        if policy == QuantityPolicy::Strict {
            if raw.fract() != Decimal::ZERO {
                return Err(DomainError::invalid_quantity(format!(
                    "quantity must be a whole number, got {raw}"
                )));
            }
            if raw <= Decimal::ZERO {
                return Err(DomainError::invalid_quantity(format!(
                    "quantity must be positive, got {raw}"
                )));
            }
        }

        let whole = raw.trunc();
        if whole < Decimal::ONE {
            return Ok(Self::ONE);
        }
        whole
            .to_u32()
            .and_then(Self::new)
            .ok_or_else(|| DomainError::invalid_quantity(format!("quantity {raw} is too large")))
    }

    /// Returns the number of units.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the quantity as a decimal.
    #[inline]
    #[must_use]
    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u32> for Quantity {
    type Error = DomainError;

    fn try_from(units: u32) -> Result<Self, Self::Error> {
        Self::new(units).ok_or_else(|| DomainError::invalid_quantity("quantity must be positive"))
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    mod tolerant {
        use super::*;

        #[test]
        fn absent_defaults_to_one() {
            assert_eq!(
                Quantity::normalize(None, QuantityPolicy::Tolerant).unwrap(),
                Quantity::ONE
            );
        }

        #[test]
        fn zero_and_negative_clamp_to_one() {
            for raw in ["0", "-1", "-250", "0.4"] {
                let q = Quantity::normalize(Some(dec(raw)), QuantityPolicy::Tolerant).unwrap();
                assert_eq!(q, Quantity::ONE, "raw={raw}");
            }
        }

        #[test]
        fn fractions_truncate() {
            let q = Quantity::normalize(Some(dec("3.9")), QuantityPolicy::Tolerant).unwrap();
            assert_eq!(q.get(), 3);
        }

        #[test]
        fn too_large_fails() {
            let result = Quantity::normalize(Some(dec("5000000000")), QuantityPolicy::Tolerant);
            assert!(matches!(result, Err(DomainError::InvalidQuantity(_))));
        }
    }

    mod strict {
        use super::*;

        #[test]
        fn rejects_absent() {
            assert!(Quantity::normalize(None, QuantityPolicy::Strict).is_err());
        }

        #[test]
        fn rejects_non_positive() {
            let err = Quantity::normalize(Some(dec("-2")), QuantityPolicy::Strict).unwrap_err();
            assert!(err.to_string().contains("must be positive"));
        }

        #[test]
        fn rejects_fraction() {
            let err = Quantity::normalize(Some(dec("1.5")), QuantityPolicy::Strict).unwrap_err();
            assert!(err.to_string().contains("whole number"));
        }

        #[test]
        fn accepts_positive_whole() {
            let q = Quantity::normalize(Some(dec("4")), QuantityPolicy::Strict).unwrap();
            assert_eq!(q.get(), 4);
        }
    }

    mod requested {
        use super::*;

        fn parse(json: &str) -> RequestedQuantity {
            serde_json::from_str(json).unwrap()
        }

        #[test]
        fn numbers_and_numeric_text_are_amounts() {
            assert_eq!(parse("3"), RequestedQuantity::Amount(dec("3")));
            assert_eq!(parse("-2"), RequestedQuantity::Amount(dec("-2")));
            assert_eq!(parse("2.5"), RequestedQuantity::Amount(dec("2.5")));
            assert_eq!(parse(r#"" 4 ""#), RequestedQuantity::Amount(dec("4")));
        }

        #[test]
        fn null_is_absent() {
            assert_eq!(parse("null"), RequestedQuantity::Absent);
        }

        #[test]
        fn non_numbers_are_invalid() {
            for json in [r#""abc""#, "true", "[1, 2]", r#"{"n": 1}"#] {
                assert_eq!(parse(json), RequestedQuantity::Invalid, "json={json}");
            }
        }

        #[test]
        fn huge_numbers_saturate() {
            assert_eq!(parse("1e30"), RequestedQuantity::Amount(Decimal::MAX));
            assert_eq!(parse("-1e30"), RequestedQuantity::Amount(Decimal::MIN));
        }

        #[test]
        fn invalid_defaults_to_one_when_tolerant() {
            let q = Quantity::resolve(RequestedQuantity::Invalid, QuantityPolicy::Tolerant).unwrap();
            assert_eq!(q, Quantity::ONE);
        }

        #[test]
        fn invalid_is_rejected_when_strict() {
            let err =
                Quantity::resolve(RequestedQuantity::Invalid, QuantityPolicy::Strict).unwrap_err();
            assert_eq!(err, DomainError::invalid_quantity("quantity must be a number"));
        }

        #[test]
        fn out_of_range_is_too_large_under_both_policies() {
            for policy in [QuantityPolicy::Tolerant, QuantityPolicy::Strict] {
                let err = Quantity::resolve(parse("1e30"), policy).unwrap_err();
                assert!(err.to_string().contains("too large"), "{policy:?}");
            }
        }

        #[test]
        fn serializes_amount_as_number() {
            let json = serde_json::to_string(&RequestedQuantity::Amount(dec("2"))).unwrap();
            assert_eq!(json, "2.0");
            assert_eq!(serde_json::to_string(&RequestedQuantity::Invalid).unwrap(), "null");
        }
    }

    #[test]
    fn serde_rejects_zero() {
        assert!(serde_json::from_str::<Quantity>("0").is_err());
        let q: Quantity = serde_json::from_str("7").unwrap();
        assert_eq!(serde_json::to_string(&q).unwrap(), "7");
    }
}
