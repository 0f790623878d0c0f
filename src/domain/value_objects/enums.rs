//! # Domain Enums
//!
//! Enumeration types for pricing concepts.
//!
//! - [`AttributeKind`] - The input shape of a service attribute
//! - [`ImpactKind`] - The arithmetic rule by which an option changes the unit price
//! - [`QuantityPolicy`] - How out-of-range quantities are treated
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an enum from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    /// The string did not name a variant of the enum.
    #[error("invalid {0} value: {1}")]
    InvalidValue(&'static str, String),
}

/// The kind of a configurable service attribute.
///
/// # Examples
///
/// ```
/// use hauze_quote::domain::value_objects::enums::AttributeKind;
///
/// let kind: AttributeKind = "select".parse().unwrap();
/// assert!(kind.is_priced());
/// assert_eq!(kind.to_string(), "select");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    /// One value out of an ordered option list.
    Select,
    /// On/off toggle.
    Boolean,
    /// Free numeric input, informational only.
    Number,
    /// Free text input, informational only.
    Text,
}

impl AttributeKind {
    /// Returns true if selections of this kind can change the price.
    #[inline]
    #[must_use]
    pub const fn is_priced(self) -> bool {
        matches!(self, Self::Select | Self::Boolean)
    }

    /// Returns the lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "select" => Ok(Self::Select),
            "boolean" | "bool" => Ok(Self::Boolean),
            "number" => Ok(Self::Number),
            "text" => Ok(Self::Text),
            _ => Err(ParseEnumError::InvalidValue("AttributeKind", s.to_string())),
        }
    }
}

/// How a selected option changes the running unit price.
///
/// With `x` the option's price impact, `q` the order quantity and `u` the
/// running unit price:
///
/// ```text
/// Fixed       u + x
/// Percentage  u * (1 + x / 100)
/// Multiplier  u * x
/// PerUnit     u + x * q
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactKind {
    /// Adds a flat amount.
    #[default]
    Fixed,
    /// Scales by a percentage.
    Percentage,
    /// Scales by a factor.
    Multiplier,
    /// Adds an amount per ordered unit.
    PerUnit,
}

impl ImpactKind {
    /// Returns the snake_case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Percentage => "percentage",
            Self::Multiplier => "multiplier",
            Self::PerUnit => "per_unit",
        }
    }

    /// Returns true if the impact depends on the order quantity.
    #[inline]
    #[must_use]
    pub const fn scales_with_quantity(self) -> bool {
        matches!(self, Self::PerUnit)
    }
}

impl fmt::Display for ImpactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImpactKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "fixed" => Ok(Self::Fixed),
            "percentage" | "percent" => Ok(Self::Percentage),
            "multiplier" => Ok(Self::Multiplier),
            "per_unit" | "perunit" => Ok(Self::PerUnit),
            _ => Err(ParseEnumError::InvalidValue("ImpactKind", s.to_string())),
        }
    }
}

/// Policy for requested quantities that are absent, fractional or not positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityPolicy {
    /// Absent or non-positive quantities become 1, fractions truncate.
    #[default]
    Tolerant,
    /// Anything other than a positive whole number is rejected.
    Strict,
}

impl QuantityPolicy {
    /// Builds the policy from a strictness flag.
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Tolerant }
    }
}

impl fmt::Display for QuantityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tolerant => write!(f, "tolerant"),
            Self::Strict => write!(f, "strict"),
        }
    }
}
