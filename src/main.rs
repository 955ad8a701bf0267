//! Airports API - a filterable read API over upstream airport reference data
//!
//! Loads the full airport list once at startup, then serves queries against
//! the cached snapshot until shut down.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use airports::cache::AirportStore;
use airports::cli::{Cli, StartupConfig};
use airports::data::UpstreamClient;
use airports::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StartupConfig::from_cli(&cli)?;

    // The listener is only bound once the store is ready
    let upstream = UpstreamClient::with_timeout(&config.upstream_url, config.timeout)?;
    let store = Arc::new(AirportStore::new());
    store.load(&upstream).await;

    server::serve(store, config.bind).await?;

    Ok(())
}
