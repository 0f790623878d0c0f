//! # Configuration
//!
//! Caller-supplied attribute selections and their resolution against a
//! service template.
//!
//! A [`Configuration`] is the loosely typed bag the client sends
//! (`{"Kumaş Tipi": "Kadife", "Ekstra Temizlik": true}`). Before any pricing
//! happens it is resolved into [`Selection`]s, one per attribute that has a
//! value, each carrying the typed value for that attribute's kind.

use crate::domain::entities::service::ServiceTemplate;
use crate::domain::entities::service_attribute::{AttributeOption, ServiceAttribute};
use crate::domain::errors::ValidationError;
use crate::domain::value_objects::enums::AttributeKind;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single configuration value as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Toggle value.
    Bool(bool),
    /// Label or free text.
    Text(String),
    /// Numeric input.
    Number(#[serde(with = "rust_decimal::serde::float")] Decimal),
}

impl ConfigValue {
    /// Returns true if the value counts as "not supplied".
    ///
    /// Only blank text is empty; an explicit `false` or `0` is a value.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Decimal> for ConfigValue {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

/// Mapping from attribute name to caller-supplied value.
///
/// # Examples
///
/// ```
/// use hauze_quote::domain::entities::Configuration;
///
/// let config = Configuration::new()
///     .with("Kumaş Tipi", "Kadife")
///     .with("Ekstra Temizlik", true);
/// assert_eq!(config.len(), 2);
/// ```
///
/// On the wire a `null` value is dropped, so it counts as not supplied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Configuration {
    values: BTreeMap<String, ConfigValue>,
}

impl<'de> Deserialize<'de> for Configuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Option<ConfigValue>>::deserialize(deserializer)?;
        let values = raw
            .into_iter()
            .filter_map(|(attribute, value)| value.map(|value| (attribute, value)))
            .collect();
        Ok(Self { values })
    }
}

impl Configuration {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, builder style.
    #[must_use]
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.insert(attribute, value);
        self
    }

    /// Sets the value for an attribute.
    pub fn insert(&mut self, attribute: impl Into<String>, value: impl Into<ConfigValue>) {
        self.values.insert(attribute.into(), value.into());
    }

    /// Returns the value for an attribute.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&ConfigValue> {
        self.values.get(attribute)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConfigValue)> {
        self.values.iter()
    }

    /// Returns keys that match no attribute of `template`.
    ///
    /// Such keys are ignored during pricing.
    #[must_use]
    pub fn unknown_keys<'a>(&'a self, template: &ServiceTemplate) -> Vec<&'a str> {
        self.values
            .keys()
            .filter(|k| template.get(k).is_none())
            .map(String::as_str)
            .collect()
    }

    /// Resolves the configuration against `template`.
    ///
    /// Returns one [`Selection`] per attribute with a value, in template
    /// order. Validation stops at the first failing attribute.
    ///
    /// # Errors
    ///
    /// - `ValidationError::MissingRequired` if a required attribute has no
    ///   value or a blank one
    /// - `ValidationError::InvalidOption` if a select value matches no label
    /// - `ValidationError::TypeMismatch` if a value has the wrong shape
    pub fn resolve<'a>(
        &self,
        template: &'a ServiceTemplate,
    ) -> Result<Vec<Selection<'a>>, ValidationError> {
        let mut selections = Vec::with_capacity(template.len());
        for attribute in template {
            let value = self.values.get(attribute.name()).filter(|v| !v.is_blank());
            let Some(value) = value else {
                if attribute.is_required() {
                    return Err(ValidationError::missing_required(attribute.name()));
                }
                continue;
            };
            selections.push(Selection::resolve(attribute, value)?);
        }
        Ok(selections)
    }
}

impl FromIterator<(String, ConfigValue)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// A configuration value checked against its attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    /// A `select` attribute resolved to one of its options.
    Choice {
        /// The attribute.
        attribute: &'a ServiceAttribute,
        /// The chosen option.
        option: &'a AttributeOption,
    },
    /// A `boolean` attribute.
    Toggle {
        /// The attribute.
        attribute: &'a ServiceAttribute,
        /// Whether the toggle is on.
        enabled: bool,
    },
    /// A `number` attribute.
    Number {
        /// The attribute.
        attribute: &'a ServiceAttribute,
        /// The numeric value.
        value: Decimal,
    },
    /// A `text` attribute.
    Text {
        /// The attribute.
        attribute: &'a ServiceAttribute,
        /// The text value.
        value: String,
    },
}

impl<'a> Selection<'a> {
    fn resolve(
        attribute: &'a ServiceAttribute,
        value: &ConfigValue,
    ) -> Result<Self, ValidationError> {
        let mismatch = || {
            ValidationError::type_mismatch(attribute.name(), attribute.kind(), value.to_string())
        };

        match (attribute.kind(), value) {
            (AttributeKind::Select, ConfigValue::Text(label)) => attribute
                .find_option(label)
                .map(|option| Self::Choice { attribute, option })
                .ok_or_else(|| ValidationError::invalid_option(attribute.name(), label.clone())),
            (AttributeKind::Boolean, ConfigValue::Bool(enabled)) => Ok(Self::Toggle {
                attribute,
                enabled: *enabled,
            }),
            (AttributeKind::Number, ConfigValue::Number(n)) => Ok(Self::Number {
                attribute,
                value: *n,
            }),
            (AttributeKind::Number, ConfigValue::Text(s)) => s
                .trim()
                .parse::<Decimal>()
                .map(|value| Self::Number { attribute, value })
                .map_err(|_| mismatch()),
            (AttributeKind::Text, ConfigValue::Text(s)) => Ok(Self::Text {
                attribute,
                value: s.clone(),
            }),
            (AttributeKind::Text, ConfigValue::Number(n)) => Ok(Self::Text {
                attribute,
                value: n.to_string(),
            }),
            _ => Err(mismatch()),
        }
    }

    /// Returns the attribute this selection belongs to.
    #[must_use]
    pub fn attribute(&self) -> &'a ServiceAttribute {
        match self {
            Self::Choice { attribute, .. }
            | Self::Toggle { attribute, .. }
            | Self::Number { attribute, .. }
            | Self::Text { attribute, .. } => attribute,
        }
    }

    /// Returns a short human-readable rendering of the chosen value.
    #[must_use]
    pub fn display_value(&self) -> String {
        match self {
            Self::Choice { option, .. } => option.label().to_string(),
            Self::Toggle { enabled, .. } => enabled.to_string(),
            Self::Number { value, .. } => value.to_string(),
            Self::Text { value, .. } => value.clone(),
        }
    }
}
