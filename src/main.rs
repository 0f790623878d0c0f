//! Quote server entry point.

use anyhow::Context;
use hauze_quote::api::rest::{AppState, create_router};
use hauze_quote::application::services::QuoteService;
use hauze_quote::domain::services::PriceQuoteEngine;
use hauze_quote::infrastructure::catalog::{load_catalog, seed_repository};
use hauze_quote::infrastructure::config::Settings;
use hauze_quote::infrastructure::logging;
use hauze_quote::infrastructure::persistence::in_memory::InMemoryServiceRepository;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;
    logging::init(&settings.logging).context("failed to install tracing subscriber")?;

    let repository = Arc::new(InMemoryServiceRepository::new());
    match &settings.catalog.path {
        Some(path) => {
            let services = load_catalog(path)?;
            seed_repository(repository.as_ref(), &services).await?;
        }
        None => tracing::warn!("no catalog.path configured, starting with an empty catalog"),
    }

    let engine = PriceQuoteEngine::new(settings.quote.quantity_policy());
    let state = Arc::new(AppState::new(QuoteService::new(repository, engine)));
    let router = create_router(state);

    let addr = settings.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(
        %addr,
        quantity_policy = %engine.quantity_policy(),
        "quote server listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("quote server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
