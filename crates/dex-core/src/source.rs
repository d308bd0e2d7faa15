use crate::error::CatalogError;
use async_trait::async_trait;
use dex_api_types::{CreatureDetail, ListingPage, PageReference};

/// Where listing pages, detail payloads and images come from.
///
/// Futures are not required to be `Send`: the browser implementation awaits
/// JS promises, and every implementation is driven from a single task.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// GET the listing page at `url`. A non-success status is an error.
    async fn fetch_page(&self, url: &str) -> Result<ListingPage, CatalogError>;

    /// GET the detail payload behind `reference.url`.
    async fn fetch_detail(&self, reference: &PageReference) -> Result<CreatureDetail, CatalogError>;

    /// Resolve the image for `id`, returning the address the image is served at.
    async fn resolve_image(&self, id: &str) -> Result<String, CatalogError>;
}
