use anyhow::{Context, Result};
use dex_core::CatalogConfig;

/// Sprites keyed by the same numeric id the listing urls carry.
pub const NATIVE_ASSET_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Build the walker config from `DEX_START_URL`, `DEX_ASSET_BASE` and `DEX_MAX_ITEMS`.
pub fn from_env() -> Result<CatalogConfig> {
    from_lookup(|key| std::env::var(key).ok())
}

pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<CatalogConfig> {
    let mut config = CatalogConfig {
        asset_base: NATIVE_ASSET_BASE.to_owned(),
        ..CatalogConfig::default()
    };

    if let Some(url) = non_empty(lookup("DEX_START_URL")) {
        config.start_url = url;
    }
    if let Some(base) = non_empty(lookup("DEX_ASSET_BASE")) {
        config.asset_base = base;
    }
    if let Some(raw) = non_empty(lookup("DEX_MAX_ITEMS")) {
        config.max_items = raw
            .parse()
            .with_context(|| format!("DEX_MAX_ITEMS must be a count, got '{raw}'"))?;
    }

    Ok(config)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_use_remote_sprites() {
        let config = from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.asset_base, NATIVE_ASSET_BASE);
        assert_eq!(config.max_items, 150);
        assert_eq!(config.start_url, CatalogConfig::default().start_url);
    }

    #[test]
    fn default_asset_base_builds_a_native_source() {
        let config = from_lookup(lookup(&[])).unwrap();
        assert!(dex_http::HttpCatalogSource::new(&config).is_ok());
    }

    #[test]
    fn overrides_apply() {
        let config = from_lookup(lookup(&[
            ("DEX_START_URL", "http://localhost:8000/list"),
            ("DEX_MAX_ITEMS", " 30 "),
            ("DEX_ASSET_BASE", ""),
        ]))
        .unwrap();
        assert_eq!(config.start_url, "http://localhost:8000/list");
        assert_eq!(config.max_items, 30);
        assert_eq!(config.asset_base, NATIVE_ASSET_BASE);
    }

    #[test]
    fn bad_max_items_is_rejected() {
        let err = from_lookup(lookup(&[("DEX_MAX_ITEMS", "lots")])).unwrap_err();
        assert!(err.to_string().contains("DEX_MAX_ITEMS"));
    }
}
