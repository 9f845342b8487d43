use std::time::Duration;

use super::*;
use crate::dom::{MemoryDom, NodeId};
use crate::platform::MemoryWindow;
use crate::storage::MemoryStore;
use crate::theme::DARK_CLASS;
use crate::ui::modal::HIDDEN_CLASS;

struct Fixture {
    dom: Rc<MemoryDom>,
    window: Rc<MemoryWindow>,
    storage: Rc<MemoryStore>,
    toggle: NodeId,
    user_controls: NodeId,
    auth_controls: NodeId,
}

/// A layout page with nav chrome, one tooltip, one modal and one
/// confirmation link.
fn fixture(path: &str, entries: &[(&str, &str)]) -> Fixture {
    let dom = Rc::new(MemoryDom::new());
    let body = dom.body_id();
    let nav = dom.insert(body, "nav", &[]);
    let toggle = dom.insert(nav, "button", &[("id", "theme-toggle")]);
    let user_controls = dom.insert(nav, "div", &[("id", "user-controls"), ("class", "hidden")]);
    dom.insert(user_controls, "span", &[("id", "user-email")]);
    dom.insert(user_controls, "a", &[("id", "logout-button")]);
    let auth_controls = dom.insert(nav, "div", &[("id", "auth-controls")]);
    dom.insert(body, "span", &[("data-tooltip", "Help")]);
    dom.insert(body, "button", &[("data-modal-target", "add-item")]);
    dom.insert(body, "div", &[("id", "add-item"), ("class", "hidden")]);
    dom.insert(body, "a", &[("data-confirm", "Delete?")]);

    let window = Rc::new(MemoryWindow::new());
    window.set_pathname(path);
    let storage = Rc::new(MemoryStore::with_entries(entries.iter().copied()));
    Fixture { dom, window, storage, toggle, user_controls, auth_controls }
}

fn app(f: &Fixture) -> App<MemoryDom, MemoryWindow, MemoryStore> {
    App::new(UiConfig::default(), Rc::clone(&f.dom), Rc::clone(&f.window), Rc::clone(&f.storage))
}

// =============================================================
// start
// =============================================================

#[test]
fn start_wires_every_helper_for_logged_out_visitor() {
    let f = fixture("/meals", &[]);
    f.window.set_prefers_dark(Some(true));

    let report = app(&f).start();

    assert_eq!(report.ui, UiBindings { tooltips: 1, modal_triggers: 1, confirmations: 1 });
    assert!(report.theme_toggle);
    assert_eq!(report.theme, Theme::Dark);
    assert_eq!(report.page, Some(Page::Meals));
    assert!(!report.logged_in);
    assert!(report.logout_button);

    assert!(f.dom.has_class(&f.dom.root_id(), DARK_CLASS));
    assert_eq!(f.storage.get("theme").as_deref(), Some("dark"));
    assert!(f.dom.has_class(&f.user_controls, HIDDEN_CLASS));
    assert!(!f.dom.has_class(&f.auth_controls, HIDDEN_CLASS));
}

#[test]
fn start_restores_stored_theme_and_toggle_flips_it() {
    let f = fixture("/", &[("theme", "light")]);
    f.window.set_prefers_dark(Some(true));

    let report = app(&f).start();
    assert_eq!(report.theme, Theme::Light);
    assert_eq!(report.page, None);
    assert_eq!(f.window.preference_reads(), 0);

    f.dom.click(f.toggle);
    assert!(f.dom.has_class(&f.dom.root_id(), DARK_CLASS));
    assert_eq!(f.storage.get("theme").as_deref(), Some("dark"));
}

#[test]
fn start_with_invalid_token_logs_out() {
    let f = fixture("/checklists", &[("accessToken", "garbage"), ("userEmail", "a@example.com"), ("theme", "light")]);

    let report = app(&f).start();

    assert!(report.logged_in);
    assert_eq!(f.storage.get("accessToken"), None);
    assert_eq!(f.window.navigations(), vec!["/login".to_owned()]);
}

#[test]
fn start_on_bare_page_binds_nothing() {
    let dom = Rc::new(MemoryDom::new());
    let window = Rc::new(MemoryWindow::new());
    let storage = Rc::new(MemoryStore::new());

    let report = App::new(UiConfig::default(), dom, window, storage).start();

    assert_eq!(report.ui, UiBindings::default());
    assert!(!report.theme_toggle);
    assert!(!report.logout_button);
}

// =============================================================
// notify / config
// =============================================================

#[test]
fn notify_uses_configured_duration() {
    let f = fixture("/", &[]);
    let config = UiConfig { notification_duration_ms: 250, ..UiConfig::default() };
    let app = App::new(config, Rc::clone(&f.dom), Rc::clone(&f.window), Rc::clone(&f.storage));

    let toast = app.notify("Saved", Severity::Success).unwrap();
    f.window.advance(Duration::from_millis(249));
    assert!(f.dom.is_attached(&toast));
    f.window.advance(Duration::from_millis(1));
    assert!(!f.dom.is_attached(&toast));
}

#[test]
fn custom_storage_keys_flow_to_session() {
    let f = fixture("/", &[("jwt", "t"), ("email", "e")]);
    let mut config = UiConfig::default();
    config.storage_keys.access_token = "jwt".to_owned();
    config.storage_keys.user_email = "email".to_owned();
    let app = App::new(config, Rc::clone(&f.dom), Rc::clone(&f.window), Rc::clone(&f.storage));

    assert!(app.session().is_logged_in());
    assert_eq!(app.config().storage_keys.access_token, "jwt");
}
