//! Logged-in / logged-out page chrome.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use std::rc::Rc;

use crate::dom::{Dom, DomEvent, EventKind};
use crate::platform::Window;
use crate::storage::KeyValueStore;
use crate::ui::modal::HIDDEN_CLASS;

use super::session::AuthSession;

pub const USER_CONTROLS_ID: &str = "user-controls";
pub const AUTH_CONTROLS_ID: &str = "auth-controls";
pub const USER_EMAIL_ID: &str = "user-email";
pub const LOGOUT_BUTTON_ID: &str = "logout-button";

/// Show the controls matching the stored credentials. When logged in, the
/// email is rendered and the token expiry checked, which may log out.
/// Returns whether credentials were present.
pub fn check_auth_state<D, W, S>(dom: &D, session: &AuthSession<W, S>) -> bool
where
    D: Dom,
    W: Window,
    S: KeyValueStore,
{
    let user_controls = dom.element_by_id(USER_CONTROLS_ID);
    let auth_controls = dom.element_by_id(AUTH_CONTROLS_ID);

    match (session.token(), session.user_email()) {
        (Some(token), Some(email)) => {
            if let Some(el) = &user_controls {
                dom.remove_class(el, HIDDEN_CLASS);
            }
            if let Some(el) = &auth_controls {
                dom.add_class(el, HIDDEN_CLASS);
            }
            if let Some(el) = dom.element_by_id(USER_EMAIL_ID) {
                dom.set_text(&el, &email);
            }
            session.verify_token(&token);
            true
        }
        _ => {
            if let Some(el) = &user_controls {
                dom.add_class(el, HIDDEN_CLASS);
            }
            if let Some(el) = &auth_controls {
                dom.remove_class(el, HIDDEN_CLASS);
            }
            false
        }
    }
}

/// Route `#logout-button` clicks to [`AuthSession::logout`]. Returns whether
/// the button exists.
pub fn bind_logout_button<D, W, S>(dom: &Rc<D>, session: &AuthSession<W, S>) -> bool
where
    D: Dom + 'static,
    W: Window + 'static,
    S: KeyValueStore + 'static,
{
    let Some(button) = dom.element_by_id(LOGOUT_BUTTON_ID) else {
        return false;
    };
    let session = session.clone();
    dom.bind(
        &button,
        EventKind::Click,
        Box::new(move |ev: &mut DomEvent<D::Node>| {
            ev.prevent_default();
            session.logout();
        }),
    );
    true
}
