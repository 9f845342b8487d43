//! Hover tooltips for `[data-tooltip]` elements.
//!
//! A single floating element with id `active-tooltip` is shown above the
//! hovered element and removed on mouse-leave. Showing a tooltip replaces any
//! tooltip already on the page.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

use std::rc::Rc;

use crate::dom::{Dom, DomError, DomEvent, EventKind, bind_selector};

pub const TOOLTIP_ATTR: &str = "data-tooltip";
pub const TOOLTIP_SELECTOR: &str = "[data-tooltip]";
pub const TOOLTIP_ID: &str = "active-tooltip";
const TOOLTIP_CLASSES: &str = "absolute bg-gray-800 text-white text-xs rounded px-2 py-1 z-50";
/// Vertical gap between the tooltip and its anchor.
const TOOLTIP_RAISE_PX: i32 = 30;

/// Show the tooltip for `anchor`. Returns `Ok(None)` when the anchor has no
/// `data-tooltip` attribute.
///
/// # Errors
///
/// Propagates DOM failures while building or attaching the tooltip.
pub fn show_tooltip<D: Dom>(dom: &D, anchor: &D::Node) -> Result<Option<D::Node>, DomError> {
    let Some(text) = dom.attribute(anchor, TOOLTIP_ATTR) else {
        return Ok(None);
    };
    hide_tooltip(dom);

    let (left, top) = dom.offset(anchor);
    let tip = dom.create_element("div")?;
    dom.set_class_name(&tip, TOOLTIP_CLASSES);
    dom.set_style(&tip, "top", &format!("{}px", top - TOOLTIP_RAISE_PX))?;
    dom.set_style(&tip, "left", &format!("{left}px"))?;
    dom.set_text(&tip, &text);
    dom.set_attribute(&tip, "id", TOOLTIP_ID)?;

    let body = dom.body().ok_or(DomError::NoBody)?;
    dom.append_child(&body, &tip)?;
    Ok(Some(tip))
}

/// Remove the active tooltip. Returns whether one was present.
pub fn hide_tooltip<D: Dom>(dom: &D) -> bool {
    match dom.element_by_id(TOOLTIP_ID) {
        Some(tip) => {
            dom.remove(&tip);
            true
        }
        None => false,
    }
}

/// Bind hover handlers on every `[data-tooltip]` element.
pub fn setup_tooltips<D: Dom + 'static>(dom: &Rc<D>) -> usize {
    let bound = bind_selector(dom.as_ref(), TOOLTIP_SELECTOR, EventKind::MouseEnter, |_| {
        let dom = Rc::clone(dom);
        Box::new(move |ev: &mut DomEvent<D::Node>| {
            if let Err(e) = show_tooltip(dom.as_ref(), ev.current_target()) {
                log::warn!("tooltip failed: {e}");
            }
        })
    });
    bind_selector(dom.as_ref(), TOOLTIP_SELECTOR, EventKind::MouseLeave, |_| {
        let dom = Rc::clone(dom);
        Box::new(move |_: &mut DomEvent<D::Node>| {
            hide_tooltip(dom.as_ref());
        })
    });
    bound
}
