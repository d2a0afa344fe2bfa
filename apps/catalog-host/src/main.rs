//! # Catalog Host
//!
//! Serves the item catalog over stdin/stdout, one JSON object per line.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Host                                     │
//! │                                                                         │
//! │  stdin ───► host::serve ───► commands ───► CatalogService ───► Store   │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │              stdout                                                     │
//! │                                                                         │
//! │  Ends on EOF or Ctrl+C                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{self, BufReader};
use tracing::{info, warn};

use catalog_host::config::HostConfig;
use catalog_host::{host, init_tracing};
use catalog_store::{CatalogService, ItemStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = HostConfig::load().context("Failed to load configuration")?;
    init_tracing(&config);

    info!(max_line_bytes = config.max_line_bytes, "Starting catalog host...");

    let catalog = CatalogService::new(Arc::new(ItemStore::new()));
    let reader = BufReader::new(io::stdin());
    let writer = io::stdout();

    tokio::select! {
        served = host::serve(&catalog, reader, writer, config.max_line_bytes) => {
            let answered = served.context("Request loop failed")?;
            info!(answered, "End of input");
        }
        _ = shutdown_signal() => {}
    }

    info!(items = catalog.count(), "Catalog host shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C. If the handler cannot be installed the host runs
/// until end of input instead.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(?e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }

    info!("Shutdown signal received, stopping...");
}
