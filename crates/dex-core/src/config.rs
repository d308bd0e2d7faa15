/// First listing page: 15 entries from offset 0.
pub const DEFAULT_START_URL: &str = "https://pokeapi.co/api/v2/pokemon?limit=15&offset=0";

/// Directory the per-id `{id}.png` images are served from.
pub const DEFAULT_ASSET_BASE: &str = "assets/img";

/// Hard cap on rendered entries.
pub const DEFAULT_MAX_ITEMS: usize = 150;

pub const DEFAULT_CONTAINER_SELECTOR: &str = r#"[data-js="pokemons-list"]"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub start_url: String,
    pub asset_base: String,
    pub max_items: usize,
    pub container_selector: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            start_url: DEFAULT_START_URL.to_owned(),
            asset_base: DEFAULT_ASSET_BASE.to_owned(),
            max_items: DEFAULT_MAX_ITEMS,
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_owned(),
        }
    }
}

impl CatalogConfig {
    /// `{asset_base}/{id}.png`, tolerating a trailing slash on the base.
    pub fn image_url(&self, id: &str) -> String {
        format!("{}/{}.png", self.asset_base.trim_end_matches('/'), id)
    }
}
