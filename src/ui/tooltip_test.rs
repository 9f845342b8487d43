use super::*;
use crate::dom::MemoryDom;

fn page() -> (Rc<MemoryDom>, crate::dom::NodeId) {
    let dom = Rc::new(MemoryDom::new());
    let anchor = dom.insert(dom.body_id(), "button", &[("data-tooltip", "Add a chore")]);
    dom.set_offset(anchor, 40, 100);
    (dom, anchor)
}

#[test]
fn mouse_enter_shows_positioned_tooltip() {
    let (dom, anchor) = page();
    assert_eq!(setup_tooltips(&dom), 1);

    dom.dispatch(anchor, EventKind::MouseEnter);

    let tip = dom.element_by_id(TOOLTIP_ID).expect("tooltip shown");
    assert_eq!(dom.text(&tip), "Add a chore");
    assert_eq!(dom.style(tip, "top").as_deref(), Some("70px"));
    assert_eq!(dom.style(tip, "left").as_deref(), Some("40px"));
    assert!(dom.has_class(&tip, "bg-gray-800"));
    assert_eq!(dom.children(dom.body_id()).last(), Some(&tip));
}

#[test]
fn mouse_leave_removes_tooltip() {
    let (dom, anchor) = page();
    setup_tooltips(&dom);

    dom.dispatch(anchor, EventKind::MouseEnter);
    dom.dispatch(anchor, EventKind::MouseLeave);
    assert!(dom.element_by_id(TOOLTIP_ID).is_none());
}

#[test]
fn only_one_tooltip_exists_at_a_time() {
    let (dom, first) = page();
    let second = dom.insert(dom.body_id(), "span", &[("data-tooltip", "Second")]);
    setup_tooltips(&dom);

    dom.dispatch(first, EventKind::MouseEnter);
    dom.dispatch(second, EventKind::MouseEnter);

    assert_eq!(dom.query_all("#active-tooltip").len(), 1);
    let tip = dom.element_by_id(TOOLTIP_ID).unwrap();
    assert_eq!(dom.text(&tip), "Second");
}

#[test]
fn show_without_attribute_is_noop() {
    let dom = MemoryDom::new();
    let plain = dom.insert(dom.body_id(), "div", &[]);
    assert_eq!(show_tooltip(&dom, &plain), Ok(None));
    assert!(!hide_tooltip(&dom));
}

#[test]
fn show_reports_dom_failures() {
    let (dom, anchor) = page();
    dom.fail_creates(true);
    assert_eq!(show_tooltip(dom.as_ref(), &anchor), Err(DomError::Create("div".to_owned())));
}
