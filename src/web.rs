//! Browser bindings
//!
//! `BrowserStore` wraps `window.localStorage`; `DomGroupSource` finds field
//! groups in the live document.

use std::collections::BTreeMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Storage};

use crate::error::{PersistError, Result};
use crate::field::{FieldElement, FieldGroup, GroupSource, InputElement, InputListener};
use crate::settings::PersisterSettings;
use crate::store::KeyValueStore;

/// LocalStorage for the current origin
pub struct BrowserStore {
    storage: Storage,
}

impl BrowserStore {
    /// LocalStorage of the current window
    pub fn local() -> Result<Self> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .map(|storage| Self { storage })
            .ok_or(PersistError::StorageUnavailable)
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| PersistError::Storage(format!("{:?}", e)))
    }

    fn entries(&self) -> BTreeMap<String, String> {
        let len = self.storage.length().unwrap_or(0);
        (0..len)
            .filter_map(|i| self.storage.key(i).ok().flatten())
            .filter_map(|key| self.get(&key).map(|value| (key, value)))
            .collect()
    }
}

/// Any form control with a `name` and a `value`
enum DomInput {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
    Select(HtmlSelectElement),
}

impl DomInput {
    fn from_element(element: Element) -> Option<Self> {
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(DomInput::Input(input)),
            Err(element) => element,
        };
        let element = match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => return Some(DomInput::TextArea(area)),
            Err(element) => element,
        };
        element.dyn_into::<HtmlSelectElement>().ok().map(DomInput::Select)
    }

    fn element(&self) -> &Element {
        match self {
            DomInput::Input(e) => e.as_ref(),
            DomInput::TextArea(e) => e.as_ref(),
            DomInput::Select(e) => e.as_ref(),
        }
    }
}

impl FieldElement for DomInput {
    fn key(&self) -> String {
        match self {
            DomInput::Input(e) => e.name(),
            DomInput::TextArea(e) => e.name(),
            DomInput::Select(e) => e.name(),
        }
    }

    fn content(&self) -> String {
        match self {
            DomInput::Input(e) => e.value(),
            DomInput::TextArea(e) => e.value(),
            DomInput::Select(e) => e.value(),
        }
    }

    fn set_content(&self, content: &str) {
        match self {
            DomInput::Input(e) => e.set_value(content),
            DomInput::TextArea(e) => e.set_value(content),
            DomInput::Select(e) => e.set_value(content),
        }
    }
}

impl InputElement for DomInput {
    fn on_input(&self, mut listener: InputListener) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| listener());
        if let Err(e) = self
            .element()
            .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
        {
            log::warn!("Field {} not bound: {:?}", self.key(), e);
        }
        // Listeners live as long as the page
        closure.forget();
    }
}

/// Element whose text content shows a validation error
struct DomText(Element);

impl FieldElement for DomText {
    fn key(&self) -> String {
        self.0.id()
    }

    fn content(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_content(&self, content: &str) {
        self.0.set_text_content(Some(content));
    }
}

/// Field groups of a live document
pub struct DomGroupSource {
    document: Document,
    settings: PersisterSettings,
}

impl DomGroupSource {
    pub fn new(document: Document, settings: PersisterSettings) -> Self {
        Self { document, settings }
    }

    fn select(&self, container: &Element, selector: &str) -> Option<Element> {
        match container.query_selector(selector) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("Bad selector {}: {:?}", selector, e);
                None
            }
        }
    }

    fn group_at(&self, index: usize, container: &Element) -> Result<FieldGroup> {
        let input = self
            .select(container, &self.settings.input_selector)
            .and_then(DomInput::from_element)
            .map(|i| Rc::new(i) as Rc<dyn InputElement>);
        let error = self
            .select(container, &self.settings.error_selector)
            .map(|e| Rc::new(DomText(e)) as Rc<dyn FieldElement>);
        FieldGroup::from_parts(index, input, error)
    }
}

impl GroupSource for DomGroupSource {
    fn field_groups(&self) -> Vec<Result<FieldGroup>> {
        let containers = self
            .document
            .get_elements_by_class_name(&self.settings.group_class);
        (0..containers.length())
            .filter_map(|i| containers.item(i))
            .enumerate()
            .map(|(index, container)| self.group_at(index, &container))
            .collect()
    }
}
