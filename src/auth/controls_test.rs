use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::auth::AuthSettings;
use crate::dom::{MemoryDom, NodeId};
use crate::platform::MemoryWindow;
use crate::storage::MemoryStore;

struct Page {
    dom: Rc<MemoryDom>,
    window: Rc<MemoryWindow>,
    storage: Rc<MemoryStore>,
    session: AuthSession<MemoryWindow, MemoryStore>,
    user_controls: NodeId,
    auth_controls: NodeId,
    email: NodeId,
    logout: NodeId,
}

fn page(entries: &[(&str, &str)]) -> Page {
    let dom = Rc::new(MemoryDom::new());
    let body = dom.body_id();
    let user_controls = dom.insert(body, "div", &[("id", "user-controls"), ("class", "hidden")]);
    let email = dom.insert(user_controls, "span", &[("id", "user-email")]);
    let logout = dom.insert(user_controls, "a", &[("id", "logout-button"), ("href", "#")]);
    let auth_controls = dom.insert(body, "div", &[("id", "auth-controls")]);

    let window = Rc::new(MemoryWindow::new());
    let storage = Rc::new(MemoryStore::with_entries(entries.iter().copied()));
    let session = AuthSession::new(Rc::clone(&window), Rc::clone(&storage), AuthSettings::default());
    Page { dom, window, storage, session, user_controls, auth_controls, email, logout }
}

fn live_token() -> String {
    let payload = serde_json::json!({ "exp": 4_102_444_800_u64 });
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload.to_string()))
}

// =============================================================
// check_auth_state
// =============================================================

#[test]
fn logged_in_shows_user_controls_and_email() {
    let token = live_token();
    let p = page(&[("accessToken", token.as_str()), ("userEmail", "parent@example.com")]);

    assert!(check_auth_state(p.dom.as_ref(), &p.session));
    assert!(!p.dom.has_class(&p.user_controls, HIDDEN_CLASS));
    assert!(p.dom.has_class(&p.auth_controls, HIDDEN_CLASS));
    assert_eq!(p.dom.text(&p.email), "parent@example.com");
    assert!(p.window.navigations().is_empty());
}

#[test]
fn logged_out_shows_auth_controls() {
    let p = page(&[("userEmail", "parent@example.com")]);

    assert!(!check_auth_state(p.dom.as_ref(), &p.session));
    assert!(p.dom.has_class(&p.user_controls, HIDDEN_CLASS));
    assert!(!p.dom.has_class(&p.auth_controls, HIDDEN_CLASS));
    assert_eq!(p.dom.text(&p.email), "");
}

#[test]
fn expired_token_is_cleared_during_check() {
    let p = page(&[("accessToken", "not-a-jwt"), ("userEmail", "parent@example.com")]);

    assert!(check_auth_state(p.dom.as_ref(), &p.session));
    assert!(p.storage.is_empty());
    assert_eq!(p.window.navigations(), vec!["/login".to_owned()]);
}

#[test]
fn missing_controls_are_tolerated() {
    let dom = MemoryDom::new();
    let window = Rc::new(MemoryWindow::new());
    let storage = Rc::new(MemoryStore::new());
    let session = AuthSession::new(window, storage, AuthSettings::default());
    assert!(!check_auth_state(&dom, &session));
}

// =============================================================
// bind_logout_button
// =============================================================

#[test]
fn logout_click_clears_credentials_and_cancels_navigation() {
    let p = page(&[("accessToken", "t"), ("userEmail", "e")]);
    assert!(bind_logout_button(&p.dom, &p.session));

    let proceeded = p.dom.click(p.logout);
    assert!(!proceeded);
    assert!(p.storage.is_empty());
    assert_eq!(p.window.navigations(), vec!["/login".to_owned()]);
}

#[test]
fn logout_binding_reports_missing_button() {
    let dom = Rc::new(MemoryDom::new());
    let session = AuthSession::new(Rc::new(MemoryWindow::new()), Rc::new(MemoryStore::new()), AuthSettings::default());
    assert!(!bind_logout_button(&dom, &session));
}
