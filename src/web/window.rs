use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Location, MediaQueryList, MediaQueryListEvent};

use crate::platform::{SchemeListener, Window};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// The browser `window`.
#[derive(Clone, Debug)]
pub struct WebWindow {
    window: Option<web_sys::Window>,
}

impl Default for WebWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl WebWindow {
    pub fn new() -> Self {
        Self { window: web_sys::window() }
    }

    fn location(&self) -> Option<Location> {
        self.window.as_ref().map(web_sys::Window::location)
    }

    fn dark_scheme_query(&self) -> Option<MediaQueryList> {
        self.window.as_ref()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
    }
}

impl Window for WebWindow {
    fn confirm(&self, message: &str) -> bool {
        self.window.as_ref().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }

    fn navigate(&self, path: &str) {
        if let Some(location) = self.location() {
            if let Err(e) = location.set_href(path) {
                log::error!("navigation to {path} failed: {e:?}");
            }
        }
    }

    fn reload(&self) {
        if let Some(location) = self.location() {
            let _ = location.reload();
        }
    }

    fn inner_width(&self) -> Option<f64> {
        self.window.as_ref()?.inner_width().ok()?.as_f64()
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.dark_scheme_query().map(|mq| mq.matches())
    }

    fn on_color_scheme_change(&self, mut listener: SchemeListener) {
        let Some(query) = self.dark_scheme_query() else {
            return;
        };
        let callback = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            listener(event.matches());
        }) as Box<dyn FnMut(MediaQueryListEvent)>);
        if let Err(e) = query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
            log::warn!("color-scheme listener not installed: {e:?}");
        }
        callback.forget();
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, callback).forget();
    }

    fn is_secure(&self) -> bool {
        self.location().and_then(|l| l.protocol().ok()).is_some_and(|p| p == "https:")
    }

    fn pathname(&self) -> String {
        self.location().and_then(|l| l.pathname().ok()).unwrap_or_default()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}
