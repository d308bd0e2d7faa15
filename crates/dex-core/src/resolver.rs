use crate::fetch::fetch_fulfilled;
use crate::source::CatalogSource;
use dex_api_types::{EnrichedRecord, PageReference};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Resolve types and image for every reference of one page.
///
/// Lookups are best-effort and keyed by identifier: a reference whose
/// details or image fail to resolve is left out, and the remaining records
/// keep the order of `references`.
pub async fn resolve_records<S>(source: &S, references: &[PageReference]) -> Vec<EnrichedRecord>
where
    S: CatalogSource + ?Sized,
{
    let keyed: Vec<(&PageReference, &str)> = references
        .iter()
        .filter_map(|reference| match reference.id() {
            Some(id) => Some((reference, id)),
            None => {
                warn!("skipping {}: no identifier in {}", reference.name, reference.url);
                None
            }
        })
        .collect();

    let details = fetch_fulfilled(keyed.iter().copied(), |(reference, id)| async move {
        source
            .fetch_detail(reference)
            .await
            .map(|detail| (id, detail.type_names()))
    });
    let images = fetch_fulfilled(keyed.iter().map(|(_, id)| *id), |id| async move {
        source.resolve_image(id).await.map(|url| (id, url))
    });
    let (details, images) = futures::join!(details, images);

    let types: HashMap<&str, Vec<String>> = details
        .into_iter()
        .filter(|(_, names)| !names.is_empty())
        .collect();
    let images: HashMap<&str, String> = images.into_iter().collect();

    keyed
        .into_iter()
        .filter_map(|(reference, id)| {
            let (Some(types), Some(image_url)) = (types.get(id), images.get(id)) else {
                debug!("leaving out {} ({}): lookup incomplete", reference.name, id);
                return None;
            };
            Some(EnrichedRecord {
                id: id.to_owned(),
                name: reference.name.clone(),
                types: types.clone(),
                image_url: image_url.clone(),
            })
        })
        .collect()
}
