//! # Catalog Loader
//!
//! Reads service definitions from a JSON or TOML file and seeds a
//! [`ServiceRepository`].
//!
//! Every template is validated while deserializing, so a catalog with a
//! duplicate attribute name or a required select without options is
//! rejected before the server starts.
//!
//! # File Shape
//!
//! ```json
//! {
//!   "services": [
//!     {
//!       "id": "koltuk-yikama",
//!       "name": "Koltuk Yıkama",
//!       "basePrice": 100,
//!       "attributes": [
//!         { "id": "a1", "name": "Temizlik", "kind": "select", "required": true,
//!           "options": [ { "label": "Standart", "priceImpact": 0, "impactKind": "fixed" } ] }
//!       ]
//!     }
//!   ]
//! }
//! ```

use crate::domain::entities::ServiceDefinition;
use crate::infrastructure::persistence::traits::{RepositoryError, ServiceRepository};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Catalog path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not `.json` or `.toml`.
    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    /// The content could not be parsed, or a template is invalid.
    #[error("invalid catalog: {0}")]
    Parse(String),

    /// Two services share an ID.
    #[error("duplicate service id in catalog: {0}")]
    DuplicateService(String),

    /// Seeding the repository failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Supported catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// JSON document.
    Json,
    /// TOML document.
    Toml,
}

impl CatalogFormat {
    /// Detects the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnsupportedFormat` for unknown extensions.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// On-disk catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Services in the catalog.
    #[serde(default)]
    pub services: Vec<ServiceDefinition>,
}

/// Parses catalog content in the given format.
///
/// # Errors
///
/// Returns `CatalogError::Parse` if the content is malformed or a template
/// breaks an invariant, and `CatalogError::DuplicateService` if two services
/// share an ID.
pub fn parse_catalog(
    content: &str,
    format: CatalogFormat,
) -> Result<Vec<ServiceDefinition>, CatalogError> {
    let file: CatalogFile = match format {
        CatalogFormat::Json => {
            serde_json::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?
        }
        CatalogFormat::Toml => {
            toml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?
        }
    };

    let mut ids = HashSet::with_capacity(file.services.len());
    for service in &file.services {
        if !ids.insert(service.id().clone()) {
            return Err(CatalogError::DuplicateService(service.id().to_string()));
        }
    }
    Ok(file.services)
}

/// Reads and parses a catalog file.
///
/// # Errors
///
/// See [`parse_catalog`]; also fails with `CatalogError::Io` or
/// `CatalogError::UnsupportedFormat`.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<ServiceDefinition>, CatalogError> {
    let path = path.as_ref();
    let format = CatalogFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let services = parse_catalog(&content, format)?;
    tracing::info!(
        path = %path.display(),
        services = services.len(),
        "catalog loaded"
    );
    Ok(services)
}

/// Inserts `services` into `repository`, returning how many were written.
///
/// # Errors
///
/// Returns `CatalogError::Repository` if an insert fails, including when a
/// service ID is already taken in `repository`.
pub async fn seed_repository(
    repository: &dyn ServiceRepository,
    services: &[ServiceDefinition],
) -> Result<usize, CatalogError> {
    for service in services {
        repository.insert(service).await?;
        tracing::debug!(service_id = %service.id(), attributes = service.template().len(), "service seeded");
    }
    Ok(services.len())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::enums::{AttributeKind, ImpactKind};
    use crate::infrastructure::persistence::in_memory::InMemoryServiceRepository;
    use rust_decimal::Decimal;

    const JSON_CATALOG: &str = r#"{
        "services": [
            {
                "id": "boya",
                "name": "Boya Badana",
                "basePrice": 30,
                "attributes": [
                    {"id": "a1", "name": "Boya Rengi", "kind": "select", "required": true,
                     "options": [{"label": "Beyaz", "priceImpact": 5, "impactKind": "per_unit"}]}
                ]
            }
        ]
    }"#;

    const TOML_CATALOG: &str = r#"
        [[services]]
        id = "koltuk"
        name = "Koltuk Yıkama"
        basePrice = 100

        [[services.attributes]]
        id = "a1"
        name = "Kumaş Tipi"
        kind = "select"
        required = true
        options = [
            { label = "Pamuk", priceImpact = 0, impactKind = "fixed" },
            { label = "Kadife", priceImpact = 12.5, impactKind = "percentage" },
        ]

        [[services.attributes]]
        id = "a2"
        name = "Ekstra Temizlik"
        kind = "boolean"
        impact = { priceImpact = 40, impactKind = "fixed" }
    "#;

    #[test]
    fn parses_json() {
        let services = parse_catalog(JSON_CATALOG, CatalogFormat::Json).unwrap();
        assert_eq!(services.len(), 1);
        let attr = &services[0].template().attributes()[0];
        assert_eq!(attr.options()[0].impact().kind(), ImpactKind::PerUnit);
    }

    #[test]
    fn parses_toml() {
        let services = parse_catalog(TOML_CATALOG, CatalogFormat::Toml).unwrap();
        let template = services[0].template();
        assert_eq!(template.len(), 2);
        let kadife = template.get("Kumaş Tipi").unwrap().find_option("Kadife").unwrap();
        assert_eq!(kadife.impact().amount(), Decimal::new(125, 1));
        assert_eq!(template.get("Ekstra Temizlik").unwrap().kind(), AttributeKind::Boolean);
    }

    #[test]
    fn rejects_invalid_template() {
        let json = r#"{"services": [{"id": "x", "name": "X", "basePrice": 1,
            "attributes": [{"id": "a", "name": "Renk", "kind": "select", "required": true}]}]}"#;
        let err = parse_catalog(json, CatalogFormat::Json).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().contains("Renk"));
    }

    #[test]
    fn rejects_negative_base_price() {
        let json = r#"{"services": [{"id": "x", "name": "X", "basePrice": -1}]}"#;
        assert!(parse_catalog(json, CatalogFormat::Json).is_err());
    }

    #[test]
    fn rejects_duplicate_service_ids() {
        let json = r#"{"services": [
            {"id": "x", "name": "X", "basePrice": 1},
            {"id": "x", "name": "Y", "basePrice": 2}
        ]}"#;
        let err = parse_catalog(json, CatalogFormat::Json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateService(ref id) if id == "x"));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(CatalogFormat::from_path(Path::new("a/b.JSON")).unwrap(), CatalogFormat::Json);
        assert_eq!(CatalogFormat::from_path(Path::new("c.toml")).unwrap(), CatalogFormat::Toml);
        assert!(CatalogFormat::from_path(Path::new("c.yaml")).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_catalog("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[tokio::test]
    async fn seeds_repository() {
        let services = parse_catalog(JSON_CATALOG, CatalogFormat::Json).unwrap();
        let repo = InMemoryServiceRepository::new();
        let seeded = seed_repository(&repo, &services).await.unwrap();
        assert_eq!(seeded, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn seeding_twice_is_duplicate() {
        let services = parse_catalog(JSON_CATALOG, CatalogFormat::Json).unwrap();
        let repo = InMemoryServiceRepository::new();
        seed_repository(&repo, &services).await.unwrap();

        let err = seed_repository(&repo, &services).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Repository(RepositoryError::Duplicate { .. })
        ));
    }
}
