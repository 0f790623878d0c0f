//! # Price Impact
//!
//! A signed magnitude paired with the rule that applies it to a unit price.

use crate::domain::value_objects::arithmetic::{
    ArithmeticResult, CheckedArithmetic, percentage_factor,
};
use crate::domain::value_objects::enums::ImpactKind;
use crate::domain::value_objects::quantity::Quantity;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The effect of a selection on the running unit price.
///
/// # Examples
///
/// ```
/// use hauze_quote::domain::value_objects::{PriceImpact, Quantity, enums::ImpactKind};
/// use rust_decimal::Decimal;
///
/// let impact = PriceImpact::new(Decimal::new(10, 0), ImpactKind::Percentage);
/// let unit = impact.apply(Decimal::new(200, 0), Quantity::ONE).unwrap();
/// assert_eq!(unit, Decimal::new(220, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceImpact {
    /// Signed magnitude; its meaning depends on `impact_kind`.
    #[serde(with = "rust_decimal::serde::float")]
    price_impact: Decimal,
    /// Rule used to apply the magnitude.
    #[serde(default)]
    impact_kind: ImpactKind,
}

impl PriceImpact {
    /// Creates a price impact.
    #[must_use]
    pub const fn new(amount: Decimal, kind: ImpactKind) -> Self {
        Self {
            price_impact: amount,
            impact_kind: kind,
        }
    }

    /// Flat surcharge (or discount when negative).
    #[must_use]
    pub const fn fixed(amount: Decimal) -> Self {
        Self::new(amount, ImpactKind::Fixed)
    }

    /// Percentage adjustment.
    #[must_use]
    pub const fn percentage(pct: Decimal) -> Self {
        Self::new(pct, ImpactKind::Percentage)
    }

    /// Multiplicative factor.
    #[must_use]
    pub const fn multiplier(factor: Decimal) -> Self {
        Self::new(factor, ImpactKind::Multiplier)
    }

    /// Per-unit surcharge.
    #[must_use]
    pub const fn per_unit(amount: Decimal) -> Self {
        Self::new(amount, ImpactKind::PerUnit)
    }

    /// Returns the signed magnitude.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.price_impact
    }

    /// Returns the impact kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ImpactKind {
        self.impact_kind
    }

    /// Returns true if applying this impact can never change a price.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        match self.impact_kind {
            ImpactKind::Fixed | ImpactKind::Percentage | ImpactKind::PerUnit => {
                self.price_impact.is_zero()
            }
            ImpactKind::Multiplier => self.price_impact == Decimal::ONE,
        }
    }

    /// Applies the impact to the running unit price.
    ///
    /// The result is not clamped; negative intermediate prices are floored
    /// once, after every impact in the template has been applied.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the computation overflows.
    pub fn apply(&self, unit: Decimal, quantity: Quantity) -> ArithmeticResult<Decimal> {
        let x = self.price_impact;
        match self.impact_kind {
            ImpactKind::Fixed => unit.safe_add(x),
            ImpactKind::Percentage => unit.safe_mul(percentage_factor(x)?),
            ImpactKind::Multiplier => unit.safe_mul(x),
            ImpactKind::PerUnit => unit.safe_add(x.safe_mul(quantity.as_decimal())?),
        }
    }
}

impl fmt::Display for PriceImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.price_impact;
        let sign = if x.is_sign_negative() { "" } else { "+" };
        match self.impact_kind {
            ImpactKind::Fixed => write!(f, "{sign}{x}"),
            ImpactKind::Percentage => write!(f, "{sign}{x}%"),
            ImpactKind::Multiplier => write!(f, "x{x}"),
            ImpactKind::PerUnit => write!(f, "{sign}{x}/unit"),
        }
    }
}
