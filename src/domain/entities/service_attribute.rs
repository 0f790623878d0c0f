//! # Service Attribute
//!
//! One configurable dimension of a service (fabric type, extra cleaning,
//! paint colour…) and the options a caller can choose from.
//!
//! # Examples
//!
//! ```
//! use hauze_quote::domain::entities::{AttributeOption, ServiceAttribute};
//! use hauze_quote::domain::value_objects::enums::ImpactKind;
//! use rust_decimal::Decimal;
//!
//! let fabric = ServiceAttribute::select(
//!     "attr-1",
//!     "Kumaş Tipi",
//!     vec![
//!         AttributeOption::new("Pamuk", Decimal::ZERO, ImpactKind::Fixed),
//!         AttributeOption::new("Kadife", Decimal::new(20, 0), ImpactKind::Percentage),
//!     ],
//! )
//! .with_required(true);
//!
//! assert!(fabric.validate().is_ok());
//! assert!(fabric.find_option("Kadife").is_some());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::enums::{AttributeKind, ImpactKind};
use crate::domain::value_objects::ids::AttributeId;
use crate::domain::value_objects::impact::PriceImpact;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// One selectable value of a `select` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeOption {
    /// Value shown to and chosen by the caller.
    label: String,
    /// Signed magnitude of the option's effect on price.
    #[serde(default, with = "rust_decimal::serde::float")]
    price_impact: Decimal,
    /// Rule used to apply `price_impact`.
    #[serde(default)]
    impact_kind: ImpactKind,
}

impl AttributeOption {
    /// Creates an option.
    #[must_use]
    pub fn new(label: impl Into<String>, price_impact: Decimal, impact_kind: ImpactKind) -> Self {
        Self {
            label: label.into(),
            price_impact,
            impact_kind,
        }
    }

    /// Creates an option that does not change the price.
    #[must_use]
    pub fn neutral(label: impl Into<String>) -> Self {
        Self::new(label, Decimal::ZERO, ImpactKind::Fixed)
    }

    /// Returns the option label.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the price impact of choosing this option.
    #[inline]
    #[must_use]
    pub const fn impact(&self) -> PriceImpact {
        PriceImpact::new(self.price_impact, self.impact_kind)
    }
}

/// One configurable dimension of a service.
///
/// # Invariants
///
/// Checked by [`ServiceAttribute::validate`]:
///
/// - `name` is not blank
/// - option labels are unique
/// - a required `select` attribute has at least one option
/// - only `select` attributes carry options
/// - only `boolean` attributes carry an `impact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAttribute {
    /// Unique identifier.
    id: AttributeId,
    /// Display and lookup key, unique within a template.
    name: String,
    /// Input shape.
    #[serde(alias = "type")]
    kind: AttributeKind,
    /// Whether a value must be supplied.
    #[serde(default)]
    required: bool,
    /// Options for `select` attributes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<AttributeOption>,
    /// Surcharge applied when a `boolean` attribute is switched on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    impact: Option<PriceImpact>,
}

impl ServiceAttribute {
    fn with_kind(id: impl Into<AttributeId>, name: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            required: false,
            options: Vec::new(),
            impact: None,
        }
    }

    /// Creates an optional `select` attribute.
    #[must_use]
    pub fn select(
        id: impl Into<AttributeId>,
        name: impl Into<String>,
        options: Vec<AttributeOption>,
    ) -> Self {
        Self {
            options,
            ..Self::with_kind(id, name, AttributeKind::Select)
        }
    }

    /// Creates an optional `boolean` attribute with no price impact.
    #[must_use]
    pub fn boolean(id: impl Into<AttributeId>, name: impl Into<String>) -> Self {
        Self::with_kind(id, name, AttributeKind::Boolean)
    }

    /// Creates an optional informational `number` attribute.
    #[must_use]
    pub fn number(id: impl Into<AttributeId>, name: impl Into<String>) -> Self {
        Self::with_kind(id, name, AttributeKind::Number)
    }

    /// Creates an optional informational `text` attribute.
    #[must_use]
    pub fn text(id: impl Into<AttributeId>, name: impl Into<String>) -> Self {
        Self::with_kind(id, name, AttributeKind::Text)
    }

    /// Sets whether the attribute is required.
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the impact applied when a boolean attribute is on.
    #[must_use]
    pub fn with_impact(mut self, impact: PriceImpact) -> Self {
        self.impact = Some(impact);
        self
    }

    /// Returns the attribute identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &AttributeId {
        &self.id
    }

    /// Returns the attribute name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attribute kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// Returns true if a value must be supplied.
    #[inline]
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the options in template order.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &[AttributeOption] {
        &self.options
    }

    /// Returns the boolean toggle impact, if any.
    #[inline]
    #[must_use]
    pub const fn impact(&self) -> Option<PriceImpact> {
        self.impact
    }

    /// Finds the option whose label matches exactly.
    #[must_use]
    pub fn find_option(&self, label: &str) -> Option<&AttributeOption> {
        self.options.iter().find(|o| o.label == label)
    }

    /// Checks the structural invariants of the attribute.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTemplate` naming the attribute when an
    /// invariant is broken.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_template(
                self.id.as_str(),
                "attribute name must not be blank",
            ));
        }

        match self.kind {
            AttributeKind::Select => {
                if self.required && self.options.is_empty() {
                    return Err(DomainError::invalid_template(
                        &self.name,
                        "required select attribute has no options",
                    ));
                }
                let mut seen = HashSet::with_capacity(self.options.len());
                for option in &self.options {
                    if !seen.insert(option.label.as_str()) {
                        return Err(DomainError::invalid_template(
                            &self.name,
                            format!("duplicate option label {:?}", option.label),
                        ));
                    }
                }
            }
            AttributeKind::Boolean | AttributeKind::Number | AttributeKind::Text => {
                if !self.options.is_empty() {
                    return Err(DomainError::invalid_template(
                        &self.name,
                        format!("{} attribute cannot have options", self.kind),
                    ));
                }
            }
        }

        if self.impact.is_some() && self.kind != AttributeKind::Boolean {
            return Err(DomainError::invalid_template(
                &self.name,
                "only boolean attributes carry a toggle impact",
            ));
        }

        Ok(())
    }
}

impl fmt::Display for ServiceAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}", self.name, self.kind)?;
        if self.required {
            write!(f, ", required")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn colour() -> ServiceAttribute {
        ServiceAttribute::select(
            "a1",
            "Boya Rengi",
            vec![AttributeOption::neutral("Beyaz"), AttributeOption::neutral("Gri")],
        )
    }

    #[test]
    fn valid_select_passes() {
        assert!(colour().with_required(true).validate().is_ok());
    }

    #[test]
    fn required_select_without_options_fails() {
        let attr = ServiceAttribute::select("a1", "Boya Rengi", vec![]).with_required(true);
        let err = attr.validate().unwrap_err();
        assert!(err.to_string().contains("Boya Rengi"));
    }

    #[test]
    fn optional_select_without_options_is_allowed() {
        assert!(ServiceAttribute::select("a1", "Ek", vec![]).validate().is_ok());
    }

    #[test]
    fn duplicate_labels_fail() {
        let attr = ServiceAttribute::select(
            "a1",
            "Boya Rengi",
            vec![AttributeOption::neutral("Beyaz"), AttributeOption::neutral("Beyaz")],
        );
        let err = attr.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate option label"));
    }

    #[test]
    fn options_on_text_fail() {
        let mut attr = ServiceAttribute::text("a2", "Not");
        attr.options.push(AttributeOption::neutral("x"));
        assert!(attr.validate().is_err());
    }

    #[test]
    fn impact_on_select_fails() {
        let attr = colour().with_impact(PriceImpact::fixed(Decimal::TEN));
        assert!(attr.validate().is_err());
    }

    #[test]
    fn blank_name_fails() {
        assert!(ServiceAttribute::number("a3", "  ").validate().is_err());
    }

    #[test]
    fn find_option_is_exact() {
        let attr = colour();
        assert!(attr.find_option("Beyaz").is_some());
        assert!(attr.find_option("beyaz").is_none());
        assert!(attr.find_option("Beyaz ").is_none());
    }

    #[test]
    fn deserializes_type_alias_and_defaults() {
        let json = r#"{
            "id": "a9",
            "name": "Ekstra Temizlik",
            "type": "boolean",
            "impact": {"priceImpact": 50, "impactKind": "fixed"}
        }"#;
        let attr: ServiceAttribute = serde_json::from_str(json).unwrap();
        assert_eq!(attr.kind(), AttributeKind::Boolean);
        assert!(!attr.is_required());
        assert_eq!(attr.impact(), Some(PriceImpact::fixed(Decimal::new(50, 0))));
    }

    #[test]
    fn option_defaults_to_neutral_fixed() {
        let option: AttributeOption = serde_json::from_str(r#"{"label": "Standart"}"#).unwrap();
        assert!(option.impact().is_neutral());
        assert_eq!(option.impact().kind(), ImpactKind::Fixed);
    }

    #[test]
    fn display_marks_required() {
        assert_eq!(colour().with_required(true).to_string(), "Boya Rengi (select, required)");
    }
}
