//! Creature catalog WASM front-end.
//!
//! Renders the catalog into `[data-js="pokemons-list"]` and loads the next
//! page whenever the last card scrolls into view, up to 150 cards.
//! Pipeline diagnostics (`tracing` events at info and above) go to the
//! browser console.

pub mod api;
pub mod dom;
pub mod logging;
pub mod observer;
pub mod render;

use dex_core::{CatalogConfig, CatalogError, PaginationState, Paginator, bootstrap};
use tracing::error;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    logging::init();

    wasm_bindgen_futures::spawn_local(async {
        if let Err(err) = init().await {
            error!("catalog front-end could not start: {}", err);
        }
    });
    Ok(())
}

/// Bind the list container and run pagination until it stops.
///
/// Failures inside pagination are logged by `bootstrap`; only setup
/// failures are returned.
async fn init() -> Result<(), CatalogError> {
    let config = CatalogConfig::default();

    let renderer = render::DomRenderer::bind(&config.container_selector)?;
    let watcher = observer::IntersectionWatcher::new().map_err(dom::render_error)?;
    let source = api::BrowserSource::new(&config);

    let mut paginator = Paginator::new(
        source,
        renderer,
        watcher,
        PaginationState::from_config(&config),
    );
    let _ = bootstrap(&mut paginator).await;
    Ok(())
}
