//! Command-line quoting against a catalog file.
//!
//! ```text
//! quote --catalog catalog/services.json --service koltuk-yikama \
//!       --config '{"Kumaş Tipi": "Kadife"}' --quantity 2 --detailed
//! ```

use anyhow::Context;
use clap::Parser;
use hauze_quote::api::rest::QuoteResponse;
use hauze_quote::application::services::{QuoteRequest, QuoteService};
use hauze_quote::domain::entities::Configuration;
use hauze_quote::domain::services::PriceQuoteEngine;
use hauze_quote::domain::value_objects::{QuantityPolicy, ServiceId};
use hauze_quote::infrastructure::catalog::{load_catalog, seed_repository};
use hauze_quote::infrastructure::logging;
use hauze_quote::infrastructure::persistence::in_memory::InMemoryServiceRepository;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "quote")]
#[command(about = "Price a service configuration from a catalog file")]
struct Cli {
    /// Catalog file (.json or .toml).
    #[arg(long)]
    catalog: PathBuf,

    /// Service ID to price.
    #[arg(long)]
    service: String,

    /// Configuration as a JSON object of attribute name to value.
    #[arg(long, default_value = "{}")]
    config: String,

    /// Requested quantity.
    #[arg(long)]
    quantity: Option<Decimal>,

    /// Reject non-positive or fractional quantities.
    #[arg(long)]
    strict: bool,

    /// Include the quantity and breakdown in the output.
    #[arg(long)]
    detailed: bool,

    /// Log debug output to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn configuration(&self) -> anyhow::Result<Configuration> {
        serde_json::from_str(&self.config).context("--config must be a JSON object")
    }

    fn engine(&self) -> PriceQuoteEngine {
        PriceQuoteEngine::new(QuantityPolicy::from_strict(self.strict))
    }

    async fn run(&self) -> anyhow::Result<QuoteResponse> {
        let config = self.configuration()?;

        let services = load_catalog(&self.catalog)?;
        let repository = Arc::new(InMemoryServiceRepository::new());
        seed_repository(repository.as_ref(), &services).await?;

        let quotes = QuoteService::new(repository, self.engine());
        let request = QuoteRequest::new(config, self.quantity);
        let quote = quotes
            .quote(&ServiceId::new(self.service.as_str()), &request)
            .await?;
        Ok(QuoteResponse::from_quote(quote, self.detailed))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_cli(cli.verbose).context("failed to install tracing subscriber")?;

    let response = cli.run().await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
