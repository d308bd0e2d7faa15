use serde::{Deserialize, Serialize};

/// One entry of a listing page: the creature's name and its detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageReference {
    pub name: String,
    pub url: String,
}

impl PageReference {
    /// Identifier encoded as the second-to-last `/` segment of `url`.
    ///
    /// `https://pokeapi.co/api/v2/pokemon/25/` yields `25`.
    pub fn id(&self) -> Option<&str> {
        let mut segments = self.url.rsplit('/');
        segments.next()?;
        segments.next()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingPage {
    pub results: Vec<PageReference>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: Option<u32>,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Detail payload of one creature. Everything but `types` is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatureDetail {
    pub types: Vec<TypeSlot>,
}

impl CreatureDetail {
    /// Type names in payload order; the first one is the primary type.
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|slot| slot.kind.name.clone()).collect()
    }
}

/// A fully resolved, renderable catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrichedRecord {
    pub id: String,
    pub name: String,
    pub types: Vec<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl EnrichedRecord {
    pub fn primary_type(&self) -> &str {
        self.types.first().map(String::as_str).unwrap_or_default()
    }
}
