//! DOM access helpers.

use dex_core::CatalogError;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Readable text for a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub fn render_error(value: JsValue) -> CatalogError {
    CatalogError::Render(js_message(&value))
}

pub fn add_class(el: &Element, cls: &str) -> Result<(), JsValue> {
    el.class_list().add_1(cls)
}

pub fn create_element(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        add_class(&el, class)?;
    }
    Ok(el)
}
