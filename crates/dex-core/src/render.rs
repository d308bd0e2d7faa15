//! Card view model and the renderer seam.

use crate::color::type_color;
use crate::error::CatalogError;
use dex_api_types::EnrichedRecord;

/// Everything a renderer needs to draw one list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub image_src: String,
    pub image_alt: String,
    /// Primary type; doubles as the item's styling class.
    pub category: String,
    pub color: &'static str,
}

impl Card {
    pub fn from_record(record: &EnrichedRecord) -> Self {
        let category = record.primary_type().to_owned();
        Card {
            id: record.id.clone(),
            title: card_title(&record.id, &record.name),
            subtitle: card_subtitle(&record.types),
            image_src: record.image_url.clone(),
            image_alt: record.name.clone(),
            color: type_color(&category),
            category,
        }
    }

    pub fn class_name(&self) -> String {
        if self.category.is_empty() {
            "card".to_owned()
        } else {
            format!("card {}", self.category)
        }
    }
}

/// `"{id}. {Name}"` with the first letter of the name upper-cased.
pub fn card_title(id: &str, name: &str) -> String {
    format!("{}. {}", id, capitalize(name))
}

/// All types joined by `" | "`; a single type is shown as-is.
pub fn card_subtitle(types: &[String]) -> String {
    types.join(" | ")
}

pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Materializes cards into a list container.
pub trait ListRenderer {
    type Node;

    /// Append every card to the container in a single mutation.
    fn append(&self, cards: &[Card]) -> Result<(), CatalogError>;

    /// Current last item of the container, if any.
    fn last_item(&self) -> Option<Self::Node>;
}
