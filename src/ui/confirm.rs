//! Confirmation prompts for `[data-confirm]` elements.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use std::rc::Rc;

use crate::dom::{Dom, DomEvent, EventKind, bind_selector};
use crate::platform::Window;

pub const CONFIRM_ATTR: &str = "data-confirm";
pub const CONFIRM_SELECTOR: &str = "[data-confirm]";
pub const DEFAULT_CONFIRM_MESSAGE: &str = "Are you sure?";

/// Prompt text for an element; an empty attribute uses the default.
pub fn confirm_message<D: Dom>(dom: &D, node: &D::Node) -> String {
    dom.attribute(node, CONFIRM_ATTR)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIRM_MESSAGE.to_owned())
}

/// Bind a yes/no prompt to every `[data-confirm]` element; declining
/// prevents the element's default action.
pub fn setup_confirmations<D, W>(dom: &Rc<D>, window: &Rc<W>) -> usize
where
    D: Dom + 'static,
    W: Window + 'static,
{
    bind_selector(dom.as_ref(), CONFIRM_SELECTOR, EventKind::Click, |_| {
        let dom = Rc::clone(dom);
        let window = Rc::clone(window);
        Box::new(move |ev: &mut DomEvent<D::Node>| {
            let message = confirm_message(dom.as_ref(), ev.current_target());
            if !window.confirm(&message) {
                ev.prevent_default();
            }
        })
    })
}
