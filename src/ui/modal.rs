//! Modal dialogs opened by `[data-modal-target]` triggers.
//!
//! A trigger's attribute names the id of the modal element. Opening removes
//! the `hidden` class; `[data-modal-close]` controls inside the modal and
//! clicks on the modal root itself (the backdrop) add it back. Close handlers
//! are wired the first time each modal opens.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::{Dom, DomEvent, EventKind, bind_selector};

pub const TARGET_ATTR: &str = "data-modal-target";
pub const TRIGGER_SELECTOR: &str = "[data-modal-target]";
pub const CLOSE_SELECTOR: &str = "[data-modal-close]";
pub const HIDDEN_CLASS: &str = "hidden";

/// Opens modals and remembers which ones already have close handlers.
pub struct ModalController<D: Dom> {
    dom: Rc<D>,
    wired: RefCell<Vec<D::Node>>,
}

impl<D: Dom + 'static> ModalController<D> {
    pub fn new(dom: Rc<D>) -> Rc<Self> {
        Rc::new(Self { dom, wired: RefCell::new(Vec::new()) })
    }

    /// Show the modal with element id `id`. Returns the modal, or `None`
    /// when no such element exists.
    pub fn open(&self, id: &str) -> Option<D::Node> {
        let modal = self.dom.element_by_id(id)?;
        self.dom.remove_class(&modal, HIDDEN_CLASS);
        self.wire_close(&modal);
        Some(modal)
    }

    pub fn close(&self, modal: &D::Node) {
        self.dom.add_class(modal, HIDDEN_CLASS);
    }

    fn wire_close(&self, modal: &D::Node) {
        if self.wired.borrow().contains(modal) {
            return;
        }
        self.wired.borrow_mut().push(modal.clone());

        for button in self.dom.query_within(modal, CLOSE_SELECTOR) {
            let dom = Rc::clone(&self.dom);
            let modal = modal.clone();
            self.dom.bind(
                &button,
                EventKind::Click,
                Box::new(move |_: &mut DomEvent<D::Node>| dom.add_class(&modal, HIDDEN_CLASS)),
            );
        }

        let dom = Rc::clone(&self.dom);
        self.dom.bind(
            modal,
            EventKind::Click,
            Box::new(move |ev: &mut DomEvent<D::Node>| {
                if ev.target() == Some(ev.current_target()) {
                    dom.add_class(ev.current_target(), HIDDEN_CLASS);
                }
            }),
        );
    }
}

/// Bind every `[data-modal-target]` trigger. Returns the trigger count.
pub fn setup_modals<D: Dom + 'static>(dom: &Rc<D>) -> usize {
    let controller = ModalController::new(Rc::clone(dom));
    bind_selector(dom.as_ref(), TRIGGER_SELECTOR, EventKind::Click, |_| {
        let controller = Rc::clone(&controller);
        Box::new(move |ev: &mut DomEvent<D::Node>| {
            let Some(id) = controller.dom.attribute(ev.current_target(), TARGET_ATTR) else {
                return;
            };
            if controller.open(&id).is_none() {
                log::debug!("modal trigger points at missing #{id}");
            }
        })
    })
}
