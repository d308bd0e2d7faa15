use async_trait::async_trait;
use dex_api_types::{CreatureDetail, ListingPage, PageReference};
use dex_core::{CatalogConfig, CatalogError, CatalogSource};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Catalog source backed by a native HTTP client.
///
/// Images are looked up under `config.asset_base`, which must be an
/// absolute URL here: there is no page to resolve a relative path against.
pub struct HttpCatalogSource {
    config: CatalogConfig,
    http: reqwest::Client,
}

impl HttpCatalogSource {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        reqwest::Url::parse(&config.asset_base).map_err(|err| {
            CatalogError::InvalidConfig(format!(
                "asset base '{}' is not an absolute URL: {}",
                config.asset_base, err
            ))
        })?;
        Ok(Self {
            config: config.clone(),
            http: reqwest::Client::new(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| CatalogError::transport(url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|err| CatalogError::decode(url, err))
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_page(&self, url: &str) -> Result<ListingPage, CatalogError> {
        self.get_json(url).await
    }

    async fn fetch_detail(&self, reference: &PageReference) -> Result<CreatureDetail, CatalogError> {
        self.get_json(&reference.url).await
    }

    async fn resolve_image(&self, id: &str) -> Result<String, CatalogError> {
        let url = self.config.image_url(id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| CatalogError::transport(&url, err))?;

        // Like a browser fetch, any completed response resolves; the final
        // address is what the image element would load.
        if !response.status().is_success() {
            debug!("image {} answered {}", url, response.status());
        }
        Ok(response.url().to_string())
    }
}
