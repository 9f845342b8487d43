//! Arena-backed in-memory document.
//!
//! Starts as `<html><body></body></html>`. Tests build markup with
//! [`MemoryDom::insert`], drive events with [`MemoryDom::dispatch`], and
//! inspect the result through the [`Dom`] trait plus a few read helpers.
//! Click events bubble from the target to the root; mouse-enter/leave fire on
//! the target only.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use super::selector::{Matchable, Selector};
use super::{Dom, DomError, DomEvent, EventKind, Handler};

/// Handle to a node in a [`MemoryDom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

const ROOT: NodeId = NodeId(0);
const BODY: NodeId = NodeId(1);

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: String,
    style: BTreeMap<String, String>,
    offset: (i32, i32),
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    fn new(tag: &str) -> Self {
        Self { tag: tag.to_ascii_lowercase(), ..Self::default() }
    }
}

impl Matchable for NodeData {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

type SharedHandler = Rc<RefCell<Handler<NodeId>>>;

pub struct MemoryDom {
    nodes: RefCell<Vec<NodeData>>,
    handlers: RefCell<Vec<(NodeId, EventKind, SharedHandler)>>,
    fail_creates: Cell<bool>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryDom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryDom")
            .field("nodes", &self.nodes.borrow().len())
            .field("handlers", &self.handlers.borrow().len())
            .finish_non_exhaustive()
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        let mut html = NodeData::new("html");
        html.children.push(BODY);
        let mut body = NodeData::new("body");
        body.parent = Some(ROOT);
        Self {
            nodes: RefCell::new(vec![html, body]),
            handlers: RefCell::new(Vec::new()),
            fail_creates: Cell::new(false),
        }
    }

    pub fn body_id(&self) -> NodeId {
        BODY
    }

    pub fn root_id(&self) -> NodeId {
        ROOT
    }

    /// Create `<tag>` under `parent` with `attrs`; a `class` entry fills the
    /// class list.
    pub fn insert(&self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let mut data = NodeData::new(tag);
        for (name, value) in attrs {
            if *name == "class" {
                data.classes = split_classes(value);
            } else {
                data.attrs.insert((*name).to_owned(), (*value).to_owned());
            }
        }
        data.parent = Some(parent);
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(data);
        if let Some(p) = nodes.get_mut(parent.0) {
            p.children.push(id);
        }
        id
    }

    pub fn set_offset(&self, node: NodeId, left: i32, top: i32) {
        if let Some(n) = self.nodes.borrow_mut().get_mut(node.0) {
            n.offset = (left, top);
        }
    }

    /// Make every later `create_element` fail.
    pub fn fail_creates(&self, fail: bool) {
        self.fail_creates.set(fail);
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.nodes.borrow().get(node.0).map(|n| n.classes.clone()).unwrap_or_default()
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow().get(node.0)?.style.get(property).cloned()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes.borrow().get(node.0).map(|n| n.children.clone()).unwrap_or_default()
    }

    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.nodes.borrow().get(node.0).map(|n| n.tag.clone())
    }

    pub fn handler_count(&self, node: NodeId, kind: EventKind) -> usize {
        self.handlers.borrow().iter().filter(|(n, k, _)| *n == node && *k == kind).count()
    }

    /// Fire `kind` at `target`. Returns `false` if any handler prevented the
    /// default action.
    pub fn dispatch(&self, target: NodeId, kind: EventKind) -> bool {
        let path = if kind.bubbles() { self.ancestors_inclusive(target) } else { vec![target] };
        let mut prevented = false;
        for node in path {
            let bound: Vec<SharedHandler> = self
                .handlers
                .borrow()
                .iter()
                .filter(|(n, k, _)| *n == node && *k == kind)
                .map(|(_, _, h)| Rc::clone(h))
                .collect();
            for handler in bound {
                let mut event = DomEvent::new(node, Some(target));
                if prevented {
                    event.prevent_default();
                }
                (handler.borrow_mut())(&mut event);
                prevented |= event.default_prevented();
            }
        }
        !prevented
    }

    pub fn click(&self, target: NodeId) -> bool {
        self.dispatch(target, EventKind::Click)
    }

    fn ancestors_inclusive(&self, node: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut path = vec![node];
        let mut cur = nodes.get(node.0).and_then(|n| n.parent);
        while let Some(p) = cur {
            path.push(p);
            cur = nodes.get(p.0).and_then(|n| n.parent);
        }
        path
    }

    /// Descendants of `scope` in document order, excluding `scope`.
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = nodes.get(scope.0).map(|n| n.children.iter().rev().copied().collect()).unwrap_or_default();
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(n) = nodes.get(id.0) {
                stack.extend(n.children.iter().rev().copied());
            }
        }
        out
    }

    fn select(&self, candidates: Vec<NodeId>, selector: &str) -> Vec<NodeId> {
        let selector = match Selector::parse(selector) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("ignoring query for {selector:?}: {e}");
                return Vec::new();
            }
        };
        let nodes = self.nodes.borrow();
        candidates
            .into_iter()
            .filter(|id| nodes.get(id.0).is_some_and(|n| selector.matches(n)))
            .collect()
    }

    fn with_node<R>(&self, node: NodeId, f: impl FnOnce(&mut NodeData) -> R) -> Option<R> {
        self.nodes.borrow_mut().get_mut(node.0).map(f)
    }
}

fn split_classes(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_owned).collect()
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn root(&self) -> Option<NodeId> {
        Some(ROOT)
    }

    fn body(&self) -> Option<NodeId> {
        Some(BODY)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let mut all = vec![ROOT];
        all.extend(self.descendants(ROOT));
        let nodes = self.nodes.borrow();
        all.into_iter().find(|n| nodes.get(n.0).and_then(|d| d.attr("id")) == Some(id))
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let mut all = vec![ROOT];
        all.extend(self.descendants(ROOT));
        self.select(all, selector)
    }

    fn query_within(&self, scope: &NodeId, selector: &str) -> Vec<NodeId> {
        self.select(self.descendants(*scope), selector)
    }

    fn create_element(&self, tag: &str) -> Result<NodeId, DomError> {
        if self.fail_creates.get() {
            return Err(DomError::Create(tag.to_owned()));
        }
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(NodeData::new(tag));
        Ok(id)
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        if *child == ROOT || self.ancestors_inclusive(*parent).contains(child) {
            return Err(DomError::Operation("append would create a cycle".to_owned()));
        }
        let mut nodes = self.nodes.borrow_mut();
        if parent.0 >= nodes.len() || child.0 >= nodes.len() {
            return Err(DomError::Operation("unknown node".to_owned()));
        }
        if let Some(old) = nodes[child.0].parent.take() {
            nodes[old.0].children.retain(|c| c != child);
        }
        nodes[child.0].parent = Some(*parent);
        nodes[parent.0].children.push(*child);
        Ok(())
    }

    fn remove(&self, node: &NodeId) {
        if *node == ROOT {
            return;
        }
        let mut nodes = self.nodes.borrow_mut();
        let Some(parent) = nodes.get_mut(node.0).and_then(|n| n.parent.take()) else {
            return;
        };
        nodes[parent.0].children.retain(|c| c != node);
    }

    fn is_attached(&self, node: &NodeId) -> bool {
        self.ancestors_inclusive(*node).last() == Some(&ROOT)
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        let data = nodes.get(node.0)?;
        if name == "class" {
            return Some(data.classes.join(" "));
        }
        data.attrs.get(name).cloned()
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.with_node(*node, |n| {
            if name == "class" {
                n.classes = split_classes(value);
            } else {
                n.attrs.insert(name.to_owned(), value.to_owned());
            }
        })
        .ok_or_else(|| DomError::Operation("unknown node".to_owned()))
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        self.with_node(*node, |n| {
            if !n.has_class(class) {
                n.classes.push(class.to_owned());
            }
        });
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.with_node(*node, |n| n.classes.retain(|c| c != class));
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes.borrow().get(node.0).is_some_and(|n| n.has_class(class))
    }

    fn set_class_name(&self, node: &NodeId, classes: &str) {
        self.with_node(*node, |n| n.classes = split_classes(classes));
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        let orphans = self
            .with_node(*node, |n| {
                n.text = text.to_owned();
                std::mem::take(&mut n.children)
            })
            .unwrap_or_default();
        let mut nodes = self.nodes.borrow_mut();
        for child in orphans {
            nodes[child.0].parent = None;
        }
    }

    fn text(&self, node: &NodeId) -> String {
        let mut out = self.nodes.borrow().get(node.0).map(|n| n.text.clone()).unwrap_or_default();
        for child in self.descendants(*node) {
            if let Some(n) = self.nodes.borrow().get(child.0) {
                out.push_str(&n.text);
            }
        }
        out
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) -> Result<(), DomError> {
        self.with_node(*node, |n| {
            n.style.insert(property.to_owned(), value.to_owned());
        })
        .ok_or_else(|| DomError::Operation("unknown node".to_owned()))
    }

    fn offset(&self, node: &NodeId) -> (i32, i32) {
        self.nodes.borrow().get(node.0).map(|n| n.offset).unwrap_or_default()
    }

    fn bind(&self, node: &NodeId, kind: EventKind, handler: Handler<NodeId>) {
        self.handlers.borrow_mut().push((*node, kind, Rc::new(RefCell::new(handler))));
    }
}
