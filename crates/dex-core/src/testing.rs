//! In-memory source, renderer and watcher shared by the unit tests.

use crate::error::CatalogError;
use crate::pagination::VisibilityWatcher;
use crate::render::{Card, ListRenderer};
use crate::source::CatalogSource;
use async_trait::async_trait;
use dex_api_types::{CreatureDetail, ListingPage, NamedResource, PageReference, TypeSlot};
use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    FetchPage(usize),
    Render(usize),
    Observe(usize),
    Unobserve(usize),
}

pub(crate) type EventLog = Rc<RefCell<Vec<Event>>>;

pub(crate) fn page_url(offset: usize) -> String {
    format!("mock://list?offset={offset}")
}

/// Catalog of `total` creatures with ids `1..=total`, served `page_size` at a time.
///
/// Even ids are `fire | flying`, odd ids are `grass`.
pub(crate) struct MockSource {
    total: usize,
    page_size: usize,
    failing_details: HashSet<String>,
    failing_images: HashSet<String>,
    failing_pages: HashSet<usize>,
    listing_failure: Option<(usize, u16)>,
    pub(crate) log: EventLog,
}

impl MockSource {
    pub(crate) fn new(total: usize, page_size: usize) -> Self {
        Self {
            total,
            page_size,
            failing_details: HashSet::new(),
            failing_images: HashSet::new(),
            failing_pages: HashSet::new(),
            listing_failure: None,
            log: EventLog::default(),
        }
    }

    pub(crate) fn failing_details(mut self, ids: &[&str]) -> Self {
        self.failing_details
            .extend(ids.iter().map(|id| (*id).to_owned()));
        self
    }

    pub(crate) fn failing_images(mut self, ids: &[&str]) -> Self {
        self.failing_images.extend(ids.iter().map(|id| (*id).to_owned()));
        self
    }

    /// Every listing request answers with `status`.
    pub(crate) fn listing_status(self, status: u16) -> Self {
        self.listing_status_from(0, status)
    }

    /// Listing requests at or past `offset` answer with `status`.
    pub(crate) fn listing_status_from(mut self, offset: usize, status: u16) -> Self {
        self.listing_failure = Some((offset, status));
        self
    }

    /// Every reference on the page at `offset` fails detail resolution.
    pub(crate) fn failing_page(mut self, offset: usize) -> Self {
        self.failing_pages.insert(offset);
        self
    }

    pub(crate) fn with_log(mut self, log: &EventLog) -> Self {
        self.log = Rc::clone(log);
        self
    }

    pub(crate) fn pages_fetched(&self) -> Vec<usize> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::FetchPage(offset) => Some(*offset),
                _ => None,
            })
            .collect()
    }
}

#[async_trait(?Send)]
impl CatalogSource for MockSource {
    async fn fetch_page(&self, url: &str) -> Result<ListingPage, CatalogError> {
        let offset: usize = url
            .strip_prefix("mock://list?offset=")
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(|| CatalogError::decode(url, "not a mock listing url"))?;
        self.log.borrow_mut().push(Event::FetchPage(offset));

        if let Some((from, status)) = self.listing_failure {
            if offset >= from {
                return Err(CatalogError::Status {
                    url: url.to_owned(),
                    status,
                });
            }
        }

        let end = (offset + self.page_size).min(self.total);
        let results = (offset + 1..=end)
            .map(|id| PageReference {
                name: format!("creature{id}"),
                url: if self.failing_pages.contains(&offset) {
                    format!("mock://missing/{id}/")
                } else {
                    format!("mock://creature/{id}/")
                },
            })
            .collect();
        let next = (end < self.total).then(|| page_url(end));
        Ok(ListingPage { results, next })
    }

    async fn fetch_detail(&self, reference: &PageReference) -> Result<CreatureDetail, CatalogError> {
        let id = reference
            .id()
            .ok_or_else(|| CatalogError::InvalidReference(reference.url.clone()))?;
        if self.failing_details.contains(id) || reference.url.starts_with("mock://missing/") {
            return Err(CatalogError::Status {
                url: reference.url.clone(),
                status: 404,
            });
        }

        let names: &[&str] = match id.parse::<u32>() {
            Ok(n) if n % 2 == 0 => &["fire", "flying"],
            _ => &["grass"],
        };
        let types = names
            .iter()
            .enumerate()
            .map(|(slot, name)| TypeSlot {
                slot: Some(slot as u32 + 1),
                kind: NamedResource {
                    name: (*name).to_owned(),
                    url: None,
                },
            })
            .collect();
        Ok(CreatureDetail { types })
    }

    async fn resolve_image(&self, id: &str) -> Result<String, CatalogError> {
        let url = format!("assets/img/{id}.png");
        if self.failing_images.contains(id) {
            return Err(CatalogError::transport(&url, "connection reset"));
        }
        Ok(url)
    }
}

/// Keeps rendered cards in memory; nodes are positions in the list.
pub(crate) struct MockRenderer {
    pub(crate) cards: RefCell<Vec<Card>>,
    pub(crate) log: EventLog,
}

impl MockRenderer {
    pub(crate) fn new(log: &EventLog) -> Self {
        Self {
            cards: RefCell::new(Vec::new()),
            log: Rc::clone(log),
        }
    }
}

impl ListRenderer for MockRenderer {
    type Node = usize;

    fn append(&self, cards: &[Card]) -> Result<(), CatalogError> {
        self.log.borrow_mut().push(Event::Render(cards.len()));
        self.cards.borrow_mut().extend_from_slice(cards);
        Ok(())
    }

    fn last_item(&self) -> Option<usize> {
        self.cards.borrow().len().checked_sub(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WatchMode {
    /// The observed node is visible right away.
    Visible,
    /// The callback is dropped without firing.
    Detached,
}

pub(crate) struct MockWatcher {
    mode: WatchMode,
    log: EventLog,
}

impl MockWatcher {
    pub(crate) fn new(mode: WatchMode, log: &EventLog) -> Self {
        Self {
            mode,
            log: Rc::clone(log),
        }
    }
}

impl VisibilityWatcher for MockWatcher {
    type Node = usize;

    fn observe(&self, node: &usize, on_visible: Box<dyn FnOnce()>) {
        self.log.borrow_mut().push(Event::Observe(*node));
        match self.mode {
            WatchMode::Visible => on_visible(),
            WatchMode::Detached => drop(on_visible),
        }
    }

    fn unobserve(&self, node: &usize) {
        self.log.borrow_mut().push(Event::Unobserve(*node));
    }
}

/// Formatted `ERROR` events written while the guard is alive.
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub(crate) fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub(crate) fn capture_errors() -> (tracing::subscriber::DefaultGuard, CapturedLogs) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::ERROR)
        .finish();
    (tracing::subscriber::set_default(subscriber), logs)
}
