//! Catalog source backed by the browser's `fetch`.
//!
//! Listing and detail requests go to the remote API; images are looked up
//! relative to the page under `asset_base`.

use crate::dom;
use async_trait::async_trait;
use dex_api_types::{CreatureDetail, ListingPage, PageReference};
use dex_core::{CatalogConfig, CatalogError, CatalogSource};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub struct BrowserSource {
    config: CatalogConfig,
}

impl BrowserSource {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

/// Perform a GET, resolving once response headers arrive.
async fn fetch(url: &str) -> Result<Response, CatalogError> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| CatalogError::transport(url, dom::js_message(&e)))?;

    let window = dom::window().map_err(|e| CatalogError::transport(url, dom::js_message(&e)))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| CatalogError::transport(url, dom::js_message(&e)))?;

    resp_value
        .dyn_into()
        .map_err(|_| CatalogError::transport(url, "response is not a Response"))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, CatalogError> {
    let resp = fetch(url).await?;
    if !resp.ok() {
        return Err(CatalogError::Status {
            url: url.to_owned(),
            status: resp.status(),
        });
    }

    let text = JsFuture::from(resp.text().map_err(|e| CatalogError::decode(url, dom::js_message(&e)))?)
        .await
        .map_err(|e| CatalogError::decode(url, dom::js_message(&e)))?;
    let text = text.as_string().unwrap_or_default();

    serde_json::from_str(&text).map_err(|e| CatalogError::decode(url, e))
}

#[async_trait(?Send)]
impl CatalogSource for BrowserSource {
    async fn fetch_page(&self, url: &str) -> Result<ListingPage, CatalogError> {
        get_json(url).await
    }

    async fn fetch_detail(&self, reference: &PageReference) -> Result<CreatureDetail, CatalogError> {
        get_json(&reference.url).await
    }

    async fn resolve_image(&self, id: &str) -> Result<String, CatalogError> {
        // fetch only rejects on network failure; a 404 still yields an address.
        let resp = fetch(&self.config.image_url(id)).await?;
        Ok(resp.url())
    }
}
