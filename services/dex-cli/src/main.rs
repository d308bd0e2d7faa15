//! Headless catalog walker.
//!
//! Drives the same pagination pipeline as the browser front-end against the
//! live listing API and prints every rendered card as a JSON line.

mod config;
mod terminal;

use anyhow::Context;
use dex_core::{PaginationState, Paginator, bootstrap};
use dex_http::HttpCatalogSource;
use terminal::{ScrollThrough, TerminalRenderer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = config::from_env()?;
    info!(
        "walking {} (cap {}, images from {})",
        config.start_url, config.max_items, config.asset_base
    );

    let source = HttpCatalogSource::new(&config)?;
    let renderer = TerminalRenderer::new(std::io::stdout());
    let mut paginator = Paginator::new(
        source,
        renderer,
        ScrollThrough,
        PaginationState::from_config(&config),
    );

    bootstrap(&mut paginator)
        .await
        .context("catalog walk failed")?;

    info!("walk finished with {} entries", paginator.state().rendered());
    Ok(())
}
