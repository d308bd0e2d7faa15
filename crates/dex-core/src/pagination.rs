//! Page-by-page loading paced by an intersection watcher.
//!
//! The controller owns an explicit [`PaginationState`] (cursor + render
//! counter). Each step fetches the page at the cursor, resolves and renders
//! it, then waits for the container's last item to become visible before the
//! next step. Steps run one after another on a single task, so two page
//! loads never overlap.

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::render::{Card, ListRenderer};
use crate::resolver::resolve_records;
use crate::source::CatalogSource;
use futures::channel::oneshot;
use tracing::{debug, error, info};

/// Viewport-visibility observer used to trigger the next page load.
pub trait VisibilityWatcher {
    type Node;

    /// Start watching `node`; call `on_visible` once it enters the viewport.
    /// Dropping `on_visible` without calling it ends pagination.
    fn observe(&self, node: &Self::Node, on_visible: Box<dyn FnOnce()>);

    fn unobserve(&self, node: &Self::Node);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    cursor: Option<String>,
    rendered: usize,
    max_items: usize,
}

impl PaginationState {
    pub fn new(start_url: impl Into<String>, max_items: usize) -> Self {
        Self {
            cursor: Some(start_url.into()),
            rendered: 0,
            max_items,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.start_url.clone(), config.max_items)
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn rendered(&self) -> usize {
        self.rendered
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// How many more items may still be rendered.
    pub fn remaining(&self) -> usize {
        self.max_items.saturating_sub(self.rendered)
    }

    pub fn is_full(&self) -> bool {
        self.rendered >= self.max_items
    }

    fn advance(&mut self, next: Option<String>) {
        self.cursor = next;
    }

    fn record_rendered(&mut self, count: usize) {
        self.rendered = (self.rendered + count).min(self.max_items);
    }
}

pub struct Paginator<S, R, W> {
    source: S,
    renderer: R,
    watcher: W,
    state: PaginationState,
}

impl<S, R, W> Paginator<S, R, W>
where
    S: CatalogSource,
    R: ListRenderer,
    W: VisibilityWatcher<Node = R::Node>,
{
    pub fn new(source: S, renderer: R, watcher: W, state: PaginationState) -> Self {
        Self {
            source,
            renderer,
            watcher,
            state,
        }
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Load, resolve and render the page at the cursor.
    ///
    /// Returns the node to watch for the next load, or `None` once loading
    /// should stop: the cap is reached, the cursor is exhausted, or the
    /// container has no item to observe.
    pub async fn load_next_page(&mut self) -> Result<Option<R::Node>, CatalogError> {
        if self.state.is_full() {
            debug!("render cap of {} reached", self.state.max_items);
            return Ok(None);
        }
        let Some(url) = self.state.cursor().map(str::to_owned) else {
            debug!("listing exhausted after {} entries", self.state.rendered);
            return Ok(None);
        };

        let page = self.source.fetch_page(&url).await?;
        self.state.advance(page.next);

        let mut records = resolve_records(&self.source, &page.results).await;
        records.truncate(self.state.remaining());

        let cards: Vec<Card> = records.iter().map(Card::from_record).collect();
        self.renderer.append(&cards)?;
        self.state.record_rendered(cards.len());
        info!(
            "rendered {} of {} entries from {} ({}/{})",
            cards.len(),
            page.results.len(),
            url,
            self.state.rendered,
            self.state.max_items
        );

        if self.state.is_full() {
            return Ok(None);
        }
        let last = self.renderer.last_item();
        if last.is_none() {
            debug!("nothing to observe, pagination stalls");
        }
        Ok(last)
    }

    /// Keep loading pages until one of the stop conditions holds.
    pub async fn run(&mut self) -> Result<(), CatalogError> {
        while let Some(last) = self.load_next_page().await? {
            if !self.wait_until_visible(&last).await {
                debug!("watcher detached, pagination stops");
                break;
            }
        }
        Ok(())
    }

    /// Observe `node` until it is visible, then stop observing it.
    async fn wait_until_visible(&self, node: &R::Node) -> bool {
        let (tx, rx) = oneshot::channel();
        self.watcher.observe(
            node,
            Box::new(move || {
                let _ = tx.send(());
            }),
        );
        let visible = rx.await.is_ok();
        self.watcher.unobserve(node);
        visible
    }
}

/// Run the paginator from its starting cursor, logging a failure once.
pub async fn bootstrap<S, R, W>(paginator: &mut Paginator<S, R, W>) -> Result<(), CatalogError>
where
    S: CatalogSource,
    R: ListRenderer,
    W: VisibilityWatcher<Node = R::Node>,
{
    let outcome = paginator.run().await;
    if let Err(err) = &outcome {
        error!("catalog loading stopped: {}", err);
    }
    outcome
}
