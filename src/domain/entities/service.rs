//! # Service Definition
//!
//! A priced service and its ordered attribute template.

use crate::domain::entities::service_attribute::ServiceAttribute;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::ids::ServiceId;
use crate::domain::value_objects::price::Price;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Ordered, validated list of attributes.
///
/// Order is significant: impacts are applied in template order against the
/// running unit price.
///
/// # Examples
///
/// ```
/// use hauze_quote::domain::entities::{ServiceAttribute, ServiceTemplate};
///
/// let template = ServiceTemplate::new(vec![
///     ServiceAttribute::boolean("a1", "Ekstra Temizlik"),
///     ServiceAttribute::text("a2", "Not"),
/// ])
/// .unwrap();
/// assert_eq!(template.len(), 2);
///
/// let dup = ServiceTemplate::new(vec![
///     ServiceAttribute::text("a1", "Not"),
///     ServiceAttribute::text("a2", "Not"),
/// ]);
/// assert!(dup.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<ServiceAttribute>", into = "Vec<ServiceAttribute>")]
pub struct ServiceTemplate {
    attributes: Vec<ServiceAttribute>,
}

impl ServiceTemplate {
    /// Creates a template after validating every attribute and name uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTemplate` if an attribute is invalid or
    /// two attributes share a name.
    pub fn new(attributes: Vec<ServiceAttribute>) -> DomainResult<Self> {
        let mut names = HashSet::with_capacity(attributes.len());
        for attribute in &attributes {
            attribute.validate()?;
            if !names.insert(attribute.name()) {
                return Err(DomainError::invalid_template(
                    attribute.name(),
                    "duplicate attribute name",
                ));
            }
        }
        Ok(Self { attributes })
    }

    /// Creates an empty template.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the attributes in template order.
    #[inline]
    #[must_use]
    pub fn attributes(&self) -> &[ServiceAttribute] {
        &self.attributes
    }

    /// Iterates the attributes in template order.
    pub fn iter(&self) -> impl Iterator<Item = &ServiceAttribute> {
        self.attributes.iter()
    }

    /// Finds an attribute by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ServiceAttribute> {
        self.attributes.iter().find(|a| a.name() == name)
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if the template has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Returns the names of required attributes.
    pub fn required_names(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .iter()
            .filter(|a| a.is_required())
            .map(ServiceAttribute::name)
    }
}

impl TryFrom<Vec<ServiceAttribute>> for ServiceTemplate {
    type Error = DomainError;

    fn try_from(attributes: Vec<ServiceAttribute>) -> Result<Self, Self::Error> {
        Self::new(attributes)
    }
}

impl From<ServiceTemplate> for Vec<ServiceAttribute> {
    fn from(template: ServiceTemplate) -> Self {
        template.attributes
    }
}

impl<'a> IntoIterator for &'a ServiceTemplate {
    type Item = &'a ServiceAttribute;
    type IntoIter = std::slice::Iter<'a, ServiceAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

/// A priced service in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinition {
    /// Service identifier.
    id: ServiceId,
    /// Display name.
    name: String,
    /// Undecorated unit price.
    base_price: Price,
    /// Attribute template.
    #[serde(default)]
    attributes: ServiceTemplate,
}

impl ServiceDefinition {
    /// Creates a service definition.
    #[must_use]
    pub fn new(
        id: impl Into<ServiceId>,
        name: impl Into<String>,
        base_price: Price,
        attributes: ServiceTemplate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_price,
            attributes,
        }
    }

    /// Returns the service identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ServiceId {
        &self.id
    }

    /// Returns the display name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base unit price.
    #[inline]
    #[must_use]
    pub const fn base_price(&self) -> Price {
        self.base_price
    }

    /// Returns the attribute template.
    #[inline]
    #[must_use]
    pub fn template(&self) -> &ServiceTemplate {
        &self.attributes
    }
}

impl fmt::Display for ServiceDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Service({} {:?} base={} attributes={})",
            self.id,
            self.name,
            self.base_price,
            self.attributes.len()
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::service_attribute::AttributeOption;
    use rust_decimal::Decimal;

    #[test]
    fn get_finds_by_name() {
        let template = ServiceTemplate::new(vec![
            ServiceAttribute::number("a1", "Metrekare"),
            ServiceAttribute::boolean("a2", "Ekstra Temizlik").with_required(true),
        ])
        .unwrap();
        assert!(template.get("Metrekare").is_some());
        assert!(template.get("Yok").is_none());
        assert_eq!(template.required_names().collect::<Vec<_>>(), ["Ekstra Temizlik"]);
    }

    #[test]
    fn invalid_attribute_is_rejected() {
        let result = ServiceTemplate::new(vec![
            ServiceAttribute::select("a1", "Boya Rengi", vec![]).with_required(true),
        ]);
        assert!(matches!(result, Err(DomainError::InvalidTemplate { .. })));
    }

    #[test]
    fn deserialization_validates() {
        let json = r#"[
            {"id": "a1", "name": "Renk", "kind": "text"},
            {"id": "a2", "name": "Renk", "kind": "text"}
        ]"#;
        let err = serde_json::from_str::<ServiceTemplate>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate attribute name"));
    }

    #[test]
    fn service_definition_wire_shape() {
        let json = r#"{
            "id": "koltuk-yikama",
            "name": "Koltuk Yıkama",
            "basePrice": 100,
            "attributes": [
                {"id": "a1", "name": "Temizlik", "kind": "select",
                 "options": [{"label": "Standart", "priceImpact": 0, "impactKind": "fixed"}]}
            ]
        }"#;
        let service: ServiceDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(service.base_price().get(), Decimal::new(100, 0));
        assert_eq!(service.template().len(), 1);
        assert_eq!(
            service.template().get("Temizlik").unwrap().options(),
            &[AttributeOption::neutral("Standart")]
        );
    }

    #[test]
    fn missing_attributes_default_to_empty() {
        let service: ServiceDefinition =
            serde_json::from_str(r#"{"id": "s", "name": "S", "basePrice": 5}"#).unwrap();
        assert!(service.template().is_empty());
    }
}
