//! Page widgets driven by data attributes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Templates opt elements in with `data-tooltip`, `data-modal-target`,
//! `data-modal-close` and `data-confirm`; [`setup_ui`] binds them once at
//! page load. Toasts are created on demand through [`notify::Notifier`].

pub mod confirm;
pub mod modal;
pub mod notify;
pub mod tooltip;

use std::rc::Rc;

use crate::dom::Dom;
use crate::platform::Window;

/// How many elements each binding pass wired up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiBindings {
    pub tooltips: usize,
    pub modal_triggers: usize,
    pub confirmations: usize,
}

/// Bind tooltips, modal triggers and confirmation prompts.
pub fn setup_ui<D, W>(dom: &Rc<D>, window: &Rc<W>) -> UiBindings
where
    D: Dom + 'static,
    W: Window + 'static,
{
    let bindings = UiBindings {
        tooltips: tooltip::setup_tooltips(dom),
        modal_triggers: modal::setup_modals(dom),
        confirmations: confirm::setup_confirmations(dom, window),
    };
    log::debug!("ui bound: {bindings:?}");
    bindings
}
