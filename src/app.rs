//! Page bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`App`] owns the shared handles (document, window, storage) and the
//! components built on them. [`App::start`] runs once per page load, after
//! the document is parsed:
//!
//! 1. bind tooltips, modal triggers and confirmations
//! 2. bind the theme toggle, then decide and apply the initial theme
//! 3. run the section hook for the current path
//! 4. render logged-in/out controls and bind the logout button
//!
//! The browser entry point in `bindings` builds an `App` over the `web`
//! implementations; tests build one over the in-memory fakes.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use crate::auth::{self, AuthSession, AuthSettings};
use crate::config::UiConfig;
use crate::dom::Dom;
use crate::net::{ApiClient, Transport};
use crate::pages::{self, Page};
use crate::platform::Window;
use crate::storage::KeyValueStore;
use crate::theme::{Theme, ThemeManager, ThemeSettings};
use crate::ui::notify::{Notifier, Severity};
use crate::ui::{self, UiBindings};

/// What [`App::start`] found and wired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartReport {
    pub ui: UiBindings,
    pub theme_toggle: bool,
    pub theme: Theme,
    pub page: Option<Page>,
    pub logged_in: bool,
    pub logout_button: bool,
}

pub struct App<D, W, S> {
    config: Rc<UiConfig>,
    dom: Rc<D>,
    window: Rc<W>,
    theme: ThemeManager<D, W, S>,
    session: AuthSession<W, S>,
    notifier: Notifier<D, W>,
}

impl<D, W, S> Clone for App<D, W, S> {
    fn clone(&self) -> Self {
        Self {
            config: Rc::clone(&self.config),
            dom: Rc::clone(&self.dom),
            window: Rc::clone(&self.window),
            theme: self.theme.clone(),
            session: self.session.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<D, W, S> App<D, W, S>
where
    D: Dom + 'static,
    W: Window + 'static,
    S: KeyValueStore + 'static,
{
    pub fn new(config: UiConfig, dom: Rc<D>, window: Rc<W>, storage: Rc<S>) -> Self {
        let theme = ThemeManager::new(
            Rc::clone(&dom),
            Rc::clone(&window),
            Rc::clone(&storage),
            ThemeSettings::from(&config),
        );
        let session = AuthSession::new(Rc::clone(&window), storage, AuthSettings::from(&config));
        let notifier = Notifier::new(Rc::clone(&dom), Rc::clone(&window));
        Self { config: Rc::new(config), dom, window, theme, session, notifier }
    }

    pub fn start(&self) -> StartReport {
        let ui = ui::setup_ui(&self.dom, &self.window);
        let theme_toggle = self.theme.bind_toggle();
        let theme = self.theme.init();
        let page = pages::init_for_path(&self.window.pathname());
        let logged_in = auth::check_auth_state(self.dom.as_ref(), &self.session);
        let logout_button = auth::bind_logout_button(&self.dom, &self.session);

        let report = StartReport { ui, theme_toggle, theme, page, logged_in, logout_button };
        log::debug!("page started: {report:?}");
        report
    }

    pub fn dom(&self) -> &Rc<D> {
        &self.dom
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn theme(&self) -> &ThemeManager<D, W, S> {
        &self.theme
    }

    pub fn session(&self) -> &AuthSession<W, S> {
        &self.session
    }

    /// Show a toast for the configured duration.
    pub fn notify(&self, message: &str, severity: Severity) -> Option<D::Node> {
        self.notifier.show(message, severity, self.config.notification_duration())
    }

    pub fn notifier(&self) -> &Notifier<D, W> {
        &self.notifier
    }

    /// Request client sharing this page's session.
    pub fn api_client<T: Transport>(&self, transport: Rc<T>) -> ApiClient<T, W, S> {
        ApiClient::new(transport, self.session.clone())
    }
}
