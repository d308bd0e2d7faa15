//! Card list rendering into the `[data-js="pokemons-list"]` container.

use crate::dom::{self, render_error};
use dex_core::{CatalogError, Card, ListRenderer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub struct DomRenderer {
    document: Document,
    container: Element,
}

impl DomRenderer {
    /// Bind to the container matching `selector`. It must already exist.
    pub fn bind(selector: &str) -> Result<Self, CatalogError> {
        let document = dom::document().map_err(render_error)?;
        let container = document
            .query_selector(selector)
            .ok()
            .flatten()
            .ok_or_else(|| CatalogError::MissingContainer(selector.to_owned()))?;
        Ok(Self {
            document,
            container,
        })
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    /// `<li class="card {type}">` with image, title and subtitle.
    fn build_item(&self, card: &Card) -> Result<Element, JsValue> {
        let li = self.document.create_element("li")?;
        li.set_attribute("class", &card.class_name())?;
        li.unchecked_ref::<HtmlElement>()
            .style()
            .set_property("--type-color", card.color)?;

        let img = dom::create_element(&self.document, "img", "card-image")?;
        img.set_attribute("src", &card.image_src)?;
        img.set_attribute("alt", &card.image_alt)?;

        let title = dom::create_element(&self.document, "h2", "card-title")?;
        title.set_text_content(Some(&card.title));

        let subtitle = dom::create_element(&self.document, "p", "card-subtitle")?;
        subtitle.set_text_content(Some(&card.subtitle));

        li.append_child(&img)?;
        li.append_child(&title)?;
        li.append_child(&subtitle)?;
        Ok(li)
    }
}

impl ListRenderer for DomRenderer {
    type Node = Element;

    fn append(&self, cards: &[Card]) -> Result<(), CatalogError> {
        let fragment = self.document.create_document_fragment();
        for card in cards {
            let item = self.build_item(card).map_err(render_error)?;
            fragment.append_child(&item).map_err(render_error)?;
        }
        self.container
            .append_child(&fragment)
            .map_err(render_error)?;
        Ok(())
    }

    fn last_item(&self) -> Option<Element> {
        self.container.last_element_child()
    }
}
