//! `IntersectionObserver` behind the pagination watcher seam.

use dex_core::VisibilityWatcher;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

type Pending = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

/// One observer for the whole list; at most one node is armed at a time.
pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    pending: Pending,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl IntersectionWatcher {
    pub fn new() -> Result<Self, JsValue> {
        let pending = Pending::default();
        let slot = Rc::clone(&pending);

        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            if !visible {
                return;
            }
            let on_visible = slot.borrow_mut().take();
            if let Some(on_visible) = on_visible {
                on_visible();
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        Ok(Self {
            observer,
            pending,
            _callback: callback,
        })
    }
}

impl VisibilityWatcher for IntersectionWatcher {
    type Node = Element;

    fn observe(&self, node: &Element, on_visible: Box<dyn FnOnce()>) {
        *self.pending.borrow_mut() = Some(on_visible);
        self.observer.observe(node);
    }

    fn unobserve(&self, node: &Element) {
        self.observer.unobserve(node);
        self.pending.borrow_mut().take();
    }
}
