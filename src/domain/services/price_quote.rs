//! # Price Quote Engine
//!
//! Computes the unit and total price of a configured service order.
//!
//! # Algorithm
//!
//! ```text
//! unit := base_price
//! for attribute in template order:
//!     select   -> apply chosen option's impact
//!     boolean  -> if true, apply the attribute's toggle impact (if any)
//!     number   -> no change
//!     text     -> no change
//! unit  := max(unit, 0)
//! total := unit * quantity
//! round both half-up to 2 decimals
//! ```
//!
//! Each impact is applied to the *running* unit price, so the template order
//! matters: a +10% option followed by a +50 fixed option is not the same as
//! the reverse.
//!
//! # Examples
//!
//! ```
//! use hauze_quote::domain::entities::{AttributeOption, Configuration, ServiceAttribute, ServiceTemplate};
//! use hauze_quote::domain::services::PriceQuoteEngine;
//! use hauze_quote::domain::value_objects::{Price, enums::ImpactKind};
//! use rust_decimal::Decimal;
//!
//! let template = ServiceTemplate::new(vec![ServiceAttribute::select(
//!     "a1",
//!     "Kumaş Tipi",
//!     vec![AttributeOption::new("Kadife", Decimal::new(10, 0), ImpactKind::Percentage)],
//! )])
//! .unwrap();
//! let config = Configuration::new().with("Kumaş Tipi", "Kadife");
//!
//! let quote = PriceQuoteEngine::default()
//!     .compute_quote(Price::new(Decimal::new(200, 0)).unwrap(), &template, &config, None)
//!     .unwrap();
//! assert_eq!(quote.unit_price().get(), Decimal::new(220, 0));
//! assert_eq!(quote.total_price().get(), Decimal::new(220, 0));
//! ```

use crate::domain::entities::configuration::{Configuration, Selection};
use crate::domain::entities::service::{ServiceDefinition, ServiceTemplate};
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::arithmetic::CheckedArithmetic;
use crate::domain::value_objects::enums::QuantityPolicy;
use crate::domain::value_objects::impact::PriceImpact;
use crate::domain::value_objects::price::Price;
use crate::domain::value_objects::quantity::{Quantity, RequestedQuantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of the unit-price chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAdjustment {
    /// Attribute that produced the adjustment.
    pub attribute: String,
    /// The chosen value (option label, or `true` for toggles).
    pub value: String,
    /// The impact that was applied.
    pub impact: PriceImpact,
    /// Running unit price before the impact.
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_before: Decimal,
    /// Running unit price after the impact (not clamped).
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_after: Decimal,
}

/// Result of pricing a configured order.
///
/// Both prices are non-negative and rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    unit_price: Price,
    total_price: Price,
    quantity: Quantity,
    breakdown: Vec<PriceAdjustment>,
}

impl PriceQuote {
    /// Returns the rounded unit price.
    #[inline]
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Returns the rounded total price.
    #[inline]
    #[must_use]
    pub const fn total_price(&self) -> Price {
        self.total_price
    }

    /// Returns the normalized quantity the quote was computed for.
    #[inline]
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the adjustments applied, in template order.
    #[inline]
    #[must_use]
    pub fn breakdown(&self) -> &[PriceAdjustment] {
        &self.breakdown
    }

    /// Consumes the quote, returning its breakdown.
    #[must_use]
    pub fn into_breakdown(self) -> Vec<PriceAdjustment> {
        self.breakdown
    }
}

impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote(unit={} x{} total={})",
            self.unit_price, self.quantity, self.total_price
        )
    }
}

/// Stateless pricing engine.
///
/// The only setting is the [`QuantityPolicy`] used to normalize the
/// caller's quantity; the engine holds no catalog state and is safe to share
/// across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceQuoteEngine {
    quantity_policy: QuantityPolicy,
}

impl PriceQuoteEngine {
    /// Creates an engine with the given quantity policy.
    #[must_use]
    pub const fn new(quantity_policy: QuantityPolicy) -> Self {
        Self { quantity_policy }
    }

    /// Returns the quantity policy.
    #[inline]
    #[must_use]
    pub const fn quantity_policy(&self) -> QuantityPolicy {
        self.quantity_policy
    }

    /// Prices `configuration` against `template`.
    ///
    /// The configuration is validated before the quantity is normalized and
    /// before any arithmetic.
    ///
    /// # Errors
    ///
    /// - `DomainError::Validation` if the configuration does not fit the template
    /// - `DomainError::InvalidQuantity` if the quantity policy rejects the quantity
    /// - `DomainError::Arithmetic` on decimal overflow
    pub fn compute_quote(
        &self,
        base_price: Price,
        template: &ServiceTemplate,
        configuration: &Configuration,
        requested_quantity: Option<Decimal>,
    ) -> DomainResult<PriceQuote> {
        self.compute_requested(base_price, template, configuration, requested_quantity.into())
    }

    /// Like [`PriceQuoteEngine::compute_quote`], for a quantity as the caller
    /// sent it.
    ///
    /// # Errors
    ///
    /// Same as [`PriceQuoteEngine::compute_quote`].
    pub fn compute_requested(
        &self,
        base_price: Price,
        template: &ServiceTemplate,
        configuration: &Configuration,
        requested_quantity: RequestedQuantity,
    ) -> DomainResult<PriceQuote> {
        let selections = configuration.resolve(template)?;
        let quantity = Quantity::resolve(requested_quantity, self.quantity_policy)?;
        price_selections(base_price, &selections, quantity)
    }

    /// Prices a configuration for a catalog service.
    ///
    /// # Errors
    ///
    /// Same as [`PriceQuoteEngine::compute_quote`].
    pub fn quote_service(
        &self,
        service: &ServiceDefinition,
        configuration: &Configuration,
        requested_quantity: RequestedQuantity,
    ) -> DomainResult<PriceQuote> {
        self.compute_requested(
            service.base_price(),
            service.template(),
            configuration,
            requested_quantity,
        )
    }
}

/// Prices `configuration` against `template` for an already-normalized quantity.
///
/// # Errors
///
/// - `DomainError::Validation` if the configuration does not fit the template
/// - `DomainError::Arithmetic` on decimal overflow
pub fn compute_quote(
    base_price: Price,
    template: &ServiceTemplate,
    configuration: &Configuration,
    quantity: Quantity,
) -> DomainResult<PriceQuote> {
    let selections = configuration.resolve(template)?;
    price_selections(base_price, &selections, quantity)
}

fn impact_of(selection: &Selection<'_>) -> Option<PriceImpact> {
    match selection {
        Selection::Choice { option, .. } => Some(option.impact()),
        Selection::Toggle {
            attribute,
            enabled: true,
        } => attribute.impact(),
        Selection::Toggle { enabled: false, .. }
        | Selection::Number { .. }
        | Selection::Text { .. } => None,
    }
}

fn price_selections(
    base_price: Price,
    selections: &[Selection<'_>],
    quantity: Quantity,
) -> DomainResult<PriceQuote> {
    let mut unit = base_price.get();
    let mut breakdown = Vec::new();

    for selection in selections {
        let Some(impact) = impact_of(selection) else {
            continue;
        };
        let unit_after = impact.apply(unit, quantity)?;
        breakdown.push(PriceAdjustment {
            attribute: selection.attribute().name().to_string(),
            value: selection.display_value(),
            impact,
            unit_before: unit,
            unit_after,
        });
        unit = unit_after;
    }

    let unit = unit.max(Decimal::ZERO);
    let total = unit.safe_mul(quantity.as_decimal())?;

    Ok(PriceQuote {
        unit_price: Price::clamped(unit).rounded(),
        total_price: Price::clamped(total).rounded(),
        quantity,
        breakdown,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::entities::service_attribute::{AttributeOption, ServiceAttribute};
    use crate::domain::errors::{DomainError, ValidationError};
    use crate::domain::value_objects::arithmetic::ArithmeticError;
    use crate::domain::value_objects::enums::ImpactKind;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn price(s: &str) -> Price {
        Price::new(dec(s)).unwrap()
    }

    fn single_option(impact: &str, kind: ImpactKind) -> ServiceTemplate {
        ServiceTemplate::new(vec![ServiceAttribute::select(
            "a1",
            "Seçenek",
            vec![AttributeOption::new("X", dec(impact), kind)],
        )])
        .unwrap()
    }

    fn pick_x() -> Configuration {
        Configuration::new().with("Seçenek", "X")
    }

    fn quote(base: &str, template: &ServiceTemplate, config: &Configuration, qty: i64) -> PriceQuote {
        PriceQuoteEngine::default()
            .compute_quote(price(base), template, config, Some(Decimal::from(qty)))
            .unwrap()
    }

    #[test]
    fn no_attributes_returns_base_price() {
        let q = quote("100", &ServiceTemplate::empty(), &Configuration::new(), 3);
        assert_eq!(q.unit_price().get(), dec("100"));
        assert_eq!(q.total_price().get(), dec("300"));
        assert!(q.breakdown().is_empty());
    }

    #[test]
    fn impacts_apply_to_running_price_in_template_order() {
        let template = ServiceTemplate::new(vec![
            ServiceAttribute::select(
                "a1",
                "Kumaş",
                vec![AttributeOption::new("Kadife", dec("10"), ImpactKind::Percentage)],
            ),
            ServiceAttribute::select(
                "a2",
                "Leke",
                vec![AttributeOption::new("Var", dec("50"), ImpactKind::Fixed)],
            ),
        ])
        .unwrap();
        let config = Configuration::new().with("Kumaş", "Kadife").with("Leke", "Var");

        // 100 * 1.10 + 50
        let q = quote("100", &template, &config, 1);
        assert_eq!(q.unit_price().get(), dec("160"));

        let reversed = ServiceTemplate::new(template.attributes().iter().rev().cloned().collect())
            .unwrap();
        // (100 + 50) * 1.10
        let q = quote("100", &reversed, &config, 1);
        assert_eq!(q.unit_price().get(), dec("165"));
    }

    #[test]
    fn negative_unit_is_floored_at_zero() {
        let template = single_option("-150", ImpactKind::Percentage);
        let q = quote("100", &template, &pick_x(), 5);
        assert_eq!(q.unit_price(), Price::zero());
        assert_eq!(q.total_price(), Price::zero());
        assert_eq!(q.breakdown()[0].unit_after, dec("-50"));
    }

    #[test]
    fn clamp_happens_once_at_the_end() {
        // 10 - 30 = -20, then x -1 = 20: the chain is not clamped per step.
        let template = ServiceTemplate::new(vec![
            ServiceAttribute::select(
                "a1",
                "İndirim",
                vec![AttributeOption::new("Büyük", dec("-30"), ImpactKind::Fixed)],
            ),
            ServiceAttribute::select(
                "a2",
                "Çarpan",
                vec![AttributeOption::new("Ters", dec("-1"), ImpactKind::Multiplier)],
            ),
        ])
        .unwrap();
        let config = Configuration::new().with("İndirim", "Büyük").with("Çarpan", "Ters");
        let q = quote("10", &template, &config, 1);
        assert_eq!(q.unit_price().get(), dec("20"));
    }

    #[test]
    fn results_round_half_up() {
        let template = single_option("33.335", ImpactKind::Fixed);
        let q = quote("0", &template, &pick_x(), 3);
        assert_eq!(q.unit_price().get(), dec("33.34"));
        // total uses the unrounded unit: 100.005 -> 100.01
        assert_eq!(q.total_price().get(), dec("100.01"));
    }

    #[test]
    fn boolean_toggle_applies_attribute_impact() {
        let template = ServiceTemplate::new(vec![
            ServiceAttribute::boolean("a1", "Ekstra Temizlik")
                .with_impact(PriceImpact::fixed(dec("40"))),
        ])
        .unwrap();

        let on = Configuration::new().with("Ekstra Temizlik", true);
        assert_eq!(quote("100", &template, &on, 1).unit_price().get(), dec("140"));

        let off = Configuration::new().with("Ekstra Temizlik", false);
        let q = quote("100", &template, &off, 1);
        assert_eq!(q.unit_price().get(), dec("100"));
        assert!(q.breakdown().is_empty());
    }

    #[test]
    fn boolean_without_impact_is_price_neutral() {
        let template =
            ServiceTemplate::new(vec![ServiceAttribute::boolean("a1", "Ekstra Temizlik")]).unwrap();
        let on = Configuration::new().with("Ekstra Temizlik", true);
        assert_eq!(quote("80", &template, &on, 2).total_price().get(), dec("160"));
    }

    #[test]
    fn number_and_text_do_not_change_price() {
        let template = ServiceTemplate::new(vec![
            ServiceAttribute::number("a1", "Metrekare"),
            ServiceAttribute::text("a2", "Not"),
        ])
        .unwrap();
        let config = Configuration::new()
            .with("Metrekare", Decimal::from(40))
            .with("Not", "zil bozuk");
        let q = quote("75", &template, &config, 1);
        assert_eq!(q.unit_price().get(), dec("75"));
    }

    #[test]
    fn breakdown_records_each_step() {
        let template = single_option("1.5", ImpactKind::Multiplier);
        let q = quote("50", &template, &pick_x(), 3);
        let step = &q.breakdown()[0];
        assert_eq!(step.attribute, "Seçenek");
        assert_eq!(step.value, "X");
        assert_eq!(step.unit_before, dec("50"));
        assert_eq!(step.unit_after, dec("75.0"));
    }

    #[test]
    fn validation_runs_before_quantity_policy() {
        let template = ServiceTemplate::new(vec![
            ServiceAttribute::select("a1", "Boya Rengi", vec![AttributeOption::neutral("Beyaz")])
                .with_required(true),
        ])
        .unwrap();
        let err = PriceQuoteEngine::new(QuantityPolicy::Strict)
            .compute_quote(price("10"), &template, &Configuration::new(), Some(dec("-1")))
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation(ValidationError::missing_required("Boya Rengi"))
        );
    }

    #[test]
    fn strict_policy_rejects_non_positive_quantity() {
        let err = PriceQuoteEngine::new(QuantityPolicy::Strict)
            .compute_quote(price("10"), &ServiceTemplate::empty(), &Configuration::new(), Some(dec("0")))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuantity(_)));
    }

    #[test]
    fn tolerant_policy_clamps_quantity() {
        let q = PriceQuoteEngine::default()
            .compute_quote(price("10"), &ServiceTemplate::empty(), &Configuration::new(), Some(dec("-4")))
            .unwrap();
        assert_eq!(q.quantity(), Quantity::ONE);
        assert_eq!(q.total_price().get(), dec("10"));
    }

    #[test]
    fn overflow_surfaces_as_arithmetic_error() {
        let template = single_option("79228162514264337593543950335", ImpactKind::Multiplier);
        let err = PriceQuoteEngine::default()
            .compute_quote(price("1000"), &template, &pick_x(), None)
            .unwrap_err();
        assert_eq!(err, DomainError::Arithmetic(ArithmeticError::Overflow));
    }

    #[test]
    fn free_function_matches_engine() {
        let template = single_option("5", ImpactKind::PerUnit);
        let quantity = Quantity::new(4).unwrap();
        let direct = compute_quote(price("30"), &template, &pick_x(), quantity).unwrap();
        let engine = quote("30", &template, &pick_x(), 4);
        assert_eq!(direct, engine);
    }

    #[test]
    fn display_is_compact() {
        let q = quote("12.5", &ServiceTemplate::empty(), &Configuration::new(), 2);
        assert_eq!(q.to_string(), "Quote(unit=12.50 x2 total=25.00)");
    }
}
