use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, NodeList};

use crate::dom::{Dom, DomError, DomEvent, EventKind, Handler};

/// The live page document.
#[derive(Clone, Debug)]
pub struct WebDom {
    document: Option<Document>,
}

impl Default for WebDom {
    fn default() -> Self {
        Self::new()
    }
}

impl WebDom {
    pub fn new() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        if document.is_none() {
            log::warn!("no document; DOM helpers are disabled");
        }
        Self { document }
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn elements(list: Result<NodeList, JsValue>, selector: &str) -> Vec<Element> {
    match list {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(e) => {
            log::warn!("selector '{selector}' rejected: {}", js_message(&e));
            Vec::new()
        }
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn root(&self) -> Option<Element> {
        self.document.as_ref()?.document_element()
    }

    fn body(&self) -> Option<Element> {
        self.document.as_ref()?.body().map(Into::into)
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.as_ref()?.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        match &self.document {
            Some(document) => elements(document.query_selector_all(selector), selector),
            None => Vec::new(),
        }
    }

    fn query_within(&self, scope: &Element, selector: &str) -> Vec<Element> {
        elements(scope.query_selector_all(selector), selector)
    }

    fn create_element(&self, tag: &str) -> Result<Element, DomError> {
        self.document
            .as_ref()
            .ok_or(DomError::NoDocument)?
            .create_element(tag)
            .map_err(|e| DomError::Create(js_message(&e)))
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), DomError> {
        parent.append_child(child).map(|_| ()).map_err(|e| DomError::Operation(js_message(&e)))
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn is_attached(&self, node: &Element) -> bool {
        node.is_connected()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) -> Result<(), DomError> {
        node.set_attribute(name, value).map_err(|e| DomError::Operation(js_message(&e)))
    }

    fn add_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_class_name(&self, node: &Element, classes: &str) {
        node.set_class_name(classes);
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) -> Result<(), DomError> {
        let html = node.dyn_ref::<HtmlElement>().ok_or_else(|| DomError::Operation("not an HTML element".to_owned()))?;
        html.style().set_property(property, value).map_err(|e| DomError::Operation(js_message(&e)))
    }

    fn offset(&self, node: &Element) -> (i32, i32) {
        node.dyn_ref::<HtmlElement>().map_or((0, 0), |html| (html.offset_left(), html.offset_top()))
    }

    fn bind(&self, node: &Element, kind: EventKind, mut handler: Handler<Element>) {
        let current = node.clone();
        let callback = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Element>().ok());
            let mut dom_event = DomEvent::new(current.clone(), target);
            handler(&mut dom_event);
            if dom_event.default_prevented() {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Err(e) = node.add_event_listener_with_callback(kind.as_str(), callback.as_ref().unchecked_ref()) {
            log::warn!("failed to bind {kind} listener: {}", js_message(&e));
        }
        callback.forget();
    }
}
