//! Shoe Card Server
//!
//! Entry point for the catalog card rendering service.

use std::sync::Arc;

use dotenvy::dotenv;
use mimalloc::MiMalloc;
use shoe_card::{config::AppConfig, server, telemetry};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    // Initialize tracing (M-LOG-STRUCTURED)
    telemetry::init();

    let config = Arc::new(AppConfig::load()?);
    server::start_server(config).await?;
    Ok(())
}
