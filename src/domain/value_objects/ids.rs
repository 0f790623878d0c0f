//! # Identifiers
//!
//! String-based identifiers for catalog entries. Catalog rows come from an
//! external store, so identifiers are opaque strings rather than generated
//! UUIDs.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identifier of a priced service in the catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use hauze_quote::domain::value_objects::ServiceId;
    ///
    /// let id = ServiceId::new("koltuk-yikama");
    /// assert_eq!(id.as_str(), "koltuk-yikama");
    /// ```
    ServiceId
);

string_id!(
    /// Identifier of a service attribute.
    AttributeId
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = ServiceId::new("svc-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"svc-1\"");
        let back: AttributeId = serde_json::from_str("\"attr-9\"").unwrap();
        assert_eq!(back, AttributeId::from("attr-9"));
    }

    #[test]
    fn display_matches_inner() {
        assert_eq!(ServiceId::from(String::from("x")).to_string(), "x");
    }
}
