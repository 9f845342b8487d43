use super::*;
use crate::dom::{MemoryDom, NodeId};

struct Page {
    dom: Rc<MemoryDom>,
    trigger: NodeId,
    modal: NodeId,
    panel: NodeId,
    close: NodeId,
}

fn page() -> Page {
    let dom = Rc::new(MemoryDom::new());
    let body = dom.body_id();
    let trigger = dom.insert(body, "button", &[("data-modal-target", "add-meal")]);
    let modal = dom.insert(body, "div", &[("id", "add-meal"), ("class", "hidden fixed inset-0")]);
    let panel = dom.insert(modal, "div", &[("class", "modal-content")]);
    let close = dom.insert(panel, "button", &[("data-modal-close", "")]);
    Page { dom, trigger, modal, panel, close }
}

fn hidden(p: &Page) -> bool {
    p.dom.has_class(&p.modal, HIDDEN_CLASS)
}

#[test]
fn trigger_click_opens_target_modal() {
    let p = page();
    assert_eq!(setup_modals(&p.dom), 1);

    p.dom.click(p.trigger);
    assert!(!hidden(&p));
    assert!(p.dom.has_class(&p.modal, "fixed"));
}

#[test]
fn close_control_hides_modal() {
    let p = page();
    setup_modals(&p.dom);
    p.dom.click(p.trigger);

    p.dom.click(p.close);
    assert!(hidden(&p));
}

#[test]
fn backdrop_click_hides_but_content_click_does_not() {
    let p = page();
    setup_modals(&p.dom);
    p.dom.click(p.trigger);

    p.dom.click(p.panel);
    assert!(!hidden(&p));

    p.dom.click(p.modal);
    assert!(hidden(&p));
}

#[test]
fn reopening_does_not_stack_close_handlers() {
    let p = page();
    setup_modals(&p.dom);
    for _ in 0..3 {
        p.dom.click(p.trigger);
        p.dom.click(p.close);
    }
    assert_eq!(p.dom.handler_count(p.close, EventKind::Click), 1);
    assert_eq!(p.dom.handler_count(p.modal, EventKind::Click), 1);
}

#[test]
fn trigger_for_missing_modal_is_noop() {
    let dom = Rc::new(MemoryDom::new());
    let trigger = dom.insert(dom.body_id(), "button", &[("data-modal-target", "nope")]);
    setup_modals(&dom);
    assert!(dom.click(trigger));
}

#[test]
fn controller_open_returns_none_for_unknown_id() {
    let p = page();
    let controller = ModalController::new(Rc::clone(&p.dom));
    assert!(controller.open("missing").is_none());
    assert_eq!(controller.open("add-meal"), Some(p.modal));
    controller.close(&p.modal);
    assert!(hidden(&p));
}
