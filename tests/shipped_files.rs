//! The sample catalog and default settings in the repository stay loadable.

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

use hauze_quote::domain::entities::Configuration;
use hauze_quote::domain::services::PriceQuoteEngine;
use hauze_quote::infrastructure::catalog::load_catalog;
use hauze_quote::infrastructure::config::{LogFormat, Settings};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

fn repo_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn sample_catalog_loads_and_prices() {
    let services = load_catalog(repo_path("catalog/services.json")).unwrap();
    assert_eq!(services.len(), 3);

    let koltuk = services
        .iter()
        .find(|s| s.id().as_str() == "koltuk-yikama")
        .unwrap();
    let config = Configuration::new()
        .with("Kumaş Tipi", "Deri")
        .with("Leke Çıkarma", true);
    let quote = PriceQuoteEngine::default()
        .quote_service(koltuk, &config, Decimal::from(2).into())
        .unwrap();
    // 200 * 1.5 + 40
    assert_eq!(quote.unit_price().get(), Decimal::from(340));
    assert_eq!(quote.total_price().get(), Decimal::from(680));
}

#[test]
fn default_settings_file_matches_built_in_defaults() {
    let settings = Settings::load_from(repo_path("config")).unwrap();
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.logging.format, LogFormat::Pretty);
    assert_eq!(
        settings.catalog.path.as_deref(),
        Some(Path::new("catalog/services.json"))
    );
}
