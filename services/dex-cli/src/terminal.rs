//! Terminal stand-ins for the list container and the viewport.

use dex_core::{CatalogError, Card, ListRenderer, VisibilityWatcher};
use std::cell::{Cell, RefCell};
use std::io::Write;
use tracing::debug;

/// Writes one JSON object per card; nodes are line numbers.
pub struct TerminalRenderer<W: Write> {
    out: RefCell<W>,
    lines: Cell<usize>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            lines: Cell::new(0),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

pub fn card_line(card: &Card) -> String {
    serde_json::json!({
        "id": card.id,
        "title": card.title,
        "subtitle": card.subtitle,
        "image": card.image_src,
        "class": card.class_name(),
        "color": card.color,
    })
    .to_string()
}

impl<W: Write> ListRenderer for TerminalRenderer<W> {
    type Node = usize;

    fn append(&self, cards: &[Card]) -> Result<(), CatalogError> {
        let mut batch = String::new();
        for card in cards {
            batch.push_str(&card_line(card));
            batch.push('\n');
        }

        let mut out = self.out.borrow_mut();
        out.write_all(batch.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|err| CatalogError::Render(err.to_string()))?;
        self.lines.set(self.lines.get() + cards.len());
        Ok(())
    }

    fn last_item(&self) -> Option<usize> {
        self.lines.get().checked_sub(1)
    }
}

/// The terminal has no viewport: every armed item counts as visible.
#[derive(Debug, Default)]
pub struct ScrollThrough;

impl VisibilityWatcher for ScrollThrough {
    type Node = usize;

    fn observe(&self, node: &usize, on_visible: Box<dyn FnOnce()>) {
        debug!("line {} reached", node);
        on_visible();
    }

    fn unobserve(&self, _node: &usize) {}
}
