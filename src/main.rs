//! Pokedex CLI - an interactive client for the PokeAPI
//!
//! Caches raw response bodies in a time-expiring in-memory store so repeated
//! browsing does not re-fetch the same pages.

mod api;
mod cache;
mod config;
mod error;
mod models;
mod repl;
mod tasks;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::ApiClient;
use config::Config;
use repl::Repl;

/// Main entry point for the Pokedex CLI.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache-backed API client (starts the cache reaper)
/// 4. Run the REPL until `exit` or end of input
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: api_base_url={}, cache_ttl={}s",
        config.api_base_url, config.cache_ttl_secs
    );

    // Create the API client; this spawns the cache reaper task
    let client = ApiClient::new(&config).context("failed to create API client")?;
    info!("Response cache initialized");

    // Run the interactive session
    let mut repl = Repl::new(client);
    repl.run().await.context("REPL terminated with an error")?;

    info!("Session ended");
    Ok(())
}
