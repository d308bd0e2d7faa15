//! Platform-independent catalog pipeline.
//!
//! Fetches listing pages, resolves each entry's details and image with
//! best-effort parallel lookups, and feeds the results to a renderer while
//! an intersection watcher paces the next page. The browser front-end and
//! the native walker plug their own source, renderer and watcher into the
//! seams defined here.

pub mod color;
pub mod config;
pub mod error;
pub mod fetch;
pub mod pagination;
pub mod render;
pub mod resolver;
pub mod source;

#[cfg(test)]
mod testing;

pub use color::{DEFAULT_COLOR, TypeCategory, type_color};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use fetch::fetch_fulfilled;
pub use pagination::{PaginationState, Paginator, VisibilityWatcher, bootstrap};
pub use render::{Card, ListRenderer};
pub use resolver::resolve_records;
pub use source::CatalogSource;
