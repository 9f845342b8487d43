//! DOM access behind a trait.
//!
//! DESIGN
//! ======
//! Theme, widget and auth helpers only need a narrow slice of the DOM:
//! lookups by id or selector, class and attribute edits, element creation,
//! and event binding. [`Dom`] captures exactly that slice so the helpers run
//! unchanged against the browser ([`crate::web::WebDom`]) and against
//! [`MemoryDom`] in tests.


mod memory;
mod selector;

pub use memory::{MemoryDom, NodeId};
pub use selector::{Selector, SelectorError};

use std::fmt;

/// Events the helpers listen for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseEnter,
    MouseLeave,
}

impl EventKind {
    /// DOM event type name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
        }
    }

    /// Whether the event propagates to ancestors.
    pub fn bubbles(self) -> bool {
        matches!(self, Self::Click)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event passed to bound handlers.
#[derive(Debug)]
pub struct DomEvent<N> {
    target: Option<N>,
    current_target: N,
    default_prevented: bool,
}

impl<N> DomEvent<N> {
    pub fn new(current_target: N, target: Option<N>) -> Self {
        Self { target, current_target, default_prevented: false }
    }

    /// Element the event originated on.
    pub fn target(&self) -> Option<&N> {
        self.target.as_ref()
    }

    /// Element the handler is bound to.
    pub fn current_target(&self) -> &N {
        &self.current_target
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Boxed event callback.
pub type Handler<N> = Box<dyn FnMut(&mut DomEvent<N>)>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("no document available")]
    NoDocument,
    #[error("document has no <body>")]
    NoBody,
    #[error("failed to create <{0}> element")]
    Create(String),
    #[error("dom operation failed: {0}")]
    Operation(String),
}

/// The DOM surface used by this crate.
///
/// Lookups return `None`/empty when nothing matches; callers treat absence
/// as a no-op rather than an error.
pub trait Dom {
    type Node: Clone + PartialEq + fmt::Debug + 'static;

    /// The `<html>` element.
    fn root(&self) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Attached elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    /// Descendants of `scope` matching `selector`, in document order.
    fn query_within(&self, scope: &Self::Node, selector: &str) -> Vec<Self::Node>;

    fn create_element(&self, tag: &str) -> Result<Self::Node, DomError>;
    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), DomError>;
    /// Detach `node` from its parent. Detached nodes are left alone.
    fn remove(&self, node: &Self::Node);
    /// Whether `node` is reachable from the document root.
    fn is_attached(&self, node: &Self::Node) -> bool;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), DomError>;

    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    /// Replace the whole `class` attribute.
    fn set_class_name(&self, node: &Self::Node, classes: &str);

    fn set_text(&self, node: &Self::Node, text: &str);
    fn text(&self, node: &Self::Node) -> String;
    fn set_style(&self, node: &Self::Node, property: &str, value: &str) -> Result<(), DomError>;
    /// `(offsetLeft, offsetTop)` in CSS pixels; zero for non-HTML nodes.
    fn offset(&self, node: &Self::Node) -> (i32, i32);

    /// Register `handler` for `kind` events on `node` for the page lifetime.
    fn bind(&self, node: &Self::Node, kind: EventKind, handler: Handler<Self::Node>);

    /// Flip `class` on `node`; returns whether the class is now present.
    fn toggle_class(&self, node: &Self::Node, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }
}

/// Bind a handler to every element matching `selector`.
///
/// `make` is called once per element with that element; the returned
/// handler is bound to it. Returns how many elements were bound.
pub fn bind_selector<D, F>(dom: &D, selector: &str, kind: EventKind, mut make: F) -> usize
where
    D: Dom,
    F: FnMut(&D::Node) -> Handler<D::Node>,
{
    let nodes = dom.query_all(selector);
    for node in &nodes {
        dom.bind(node, kind, make(node));
    }
    nodes.len()
}
