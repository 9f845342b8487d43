//! WASM entry point and page-script exports.
//!
//! SYSTEM CONTEXT
//! ==============
//! The module runs [`start`] when instantiated. Once the document is parsed
//! it reads `#ui-config`, installs the console logger, and builds and starts
//! the [`App`]; until then the exports are inert. Page scripts reach the
//! helpers through `window.app` (`showNotification`, `formatDate`) and
//! `window.auth` (`checkAuthState`, `logout`, `getAuthHeaders`,
//! `apiRequest`). The same functions are also plain module exports.
//!
//! ERROR HANDLING
//! ==============
//! Exports never throw for missing elements or credentials. `formatDate`
//! rejects unparseable input, and `apiRequest` rejects its promise with the
//! error message when the request fails.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::UiConfig;
use crate::format::format_date_str;
use crate::logging;
use crate::net::{ApiResponse, RequestOptions, ScriptRequestOptions};
use crate::storage::BrowserStorage;
use crate::ui::notify::Severity;
use crate::web::{GlooTransport, WebDom, WebWindow};

type BrowserApp = App<WebDom, WebWindow, BrowserStorage>;

thread_local! {
    static APP: RefCell<Option<BrowserApp>> = const { RefCell::new(None) };
}

fn app() -> Option<BrowserApp> {
    APP.with(|slot| slot.borrow().clone())
}

#[wasm_bindgen(start)]
pub fn start() {
    install_namespaces();
    on_document_ready(boot);
}

/// Runs after parsing so a `#ui-config` block anywhere in the page is seen.
fn boot() {
    let config = UiConfig::from_document();
    logging::init(&config.log_level);

    let app = App::new(config, Rc::new(WebDom::new()), Rc::new(WebWindow::new()), Rc::new(BrowserStorage::local()));
    APP.with(|slot| *slot.borrow_mut() = Some(app.clone()));
    app.start();
}

fn on_document_ready(run: impl FnOnce() + 'static) {
    let document = web_sys::window().and_then(|w| w.document());
    match document {
        Some(document) if document.ready_state() == "loading" => {
            let callback = Closure::once_into_js(run);
            if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()) {
                log::error!("DOMContentLoaded listener not installed: {e:?}");
            }
        }
        _ => run(),
    }
}

// =============================================================================
// window.app
// =============================================================================

/// Show a toast. `kind` is `success`, `error`, `warning` or `info`
/// (default); `duration_ms` defaults to the configured duration.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>, duration_ms: Option<u32>) -> bool {
    let Some(app) = app() else {
        return false;
    };
    let severity = kind.as_deref().map_or(Severity::Info, Severity::parse);
    let duration = duration_ms.map_or_else(|| app.config().notification_duration(), |ms| {
        std::time::Duration::from_millis(u64::from(ms))
    });
    app.notifier().show(message, severity, duration).is_some()
}

/// Format an ISO-8601 date string as `Jan 5, 2024` (or with `, 03:07 PM`).
///
/// # Errors
///
/// Rejects input that is not a recognized date.
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(date: &str, include_time: Option<bool>) -> Result<String, JsValue> {
    format_date_str(date, include_time.unwrap_or(false)).map_err(|e| JsValue::from_str(&e.to_string()))
}

// =============================================================================
// window.auth
// =============================================================================

#[wasm_bindgen(js_name = checkAuthState)]
pub fn check_auth_state() -> bool {
    app().is_some_and(|app| crate::auth::check_auth_state(app.dom().as_ref(), app.session()))
}

#[wasm_bindgen]
pub fn logout() {
    if let Some(app) = app() {
        app.session().logout();
    }
}

/// Header object for the stored token, or `null` when logged out.
#[wasm_bindgen(js_name = getAuthHeaders)]
pub fn get_auth_headers() -> JsValue {
    let Some(headers) = app().and_then(|app| app.session().auth_headers()) else {
        return JsValue::NULL;
    };
    let object = js_sys::Object::new();
    for (name, value) in headers {
        let _ = js_sys::Reflect::set(&object, &JsValue::from_str(&name), &JsValue::from_str(&value));
    }
    object.into()
}

fn request_options(options: &JsValue) -> Result<RequestOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(RequestOptions::get());
    }
    let raw = js_sys::JSON::stringify(options)?.as_string().unwrap_or_default();
    ScriptRequestOptions::from_json(&raw)
        .and_then(ScriptRequestOptions::into_options)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rebuild a fetch `Response` so page scripts can call `json()`, `text()`
/// and `headers.get()` on the result.
fn response_to_js(response: &ApiResponse) -> Result<JsValue, JsValue> {
    let headers = web_sys::Headers::new()?;
    for (name, value) in &response.headers {
        headers.append(name, value)?;
    }
    let init = web_sys::ResponseInit::new();
    init.set_status(response.status);
    init.set_status_text(&response.status_text);
    init.set_headers(&headers);
    // 204, 205 and 304 responses must not carry a body.
    let body = Some(response.body.as_str()).filter(|b| !b.is_empty());
    web_sys::Response::new_with_opt_str_and_init(body, &init).map(Into::into)
}

/// Authenticated request. Resolves to a fetch `Response`.
#[wasm_bindgen(js_name = apiRequest)]
pub fn api_request(url: String, options: JsValue) -> js_sys::Promise {
    let parsed = request_options(&options);
    wasm_bindgen_futures::future_to_promise(async move {
        let options = parsed?;
        let app = app().ok_or_else(|| JsValue::from_str("household-ui is not started"))?;
        let client = app.api_client(Rc::new(GlooTransport));
        let response = client.request(&url, options).await.map_err(|e| JsValue::from_str(&e.to_string()))?;
        response_to_js(&response)
    })
}

// =============================================================================
// Namespaces
// =============================================================================

fn install_namespaces() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let app_ns = namespace(&window, "app");
    set_fn(&app_ns, "showNotification", Closure::<dyn Fn(String, Option<String>, Option<u32>) -> bool>::new(
        |message: String, kind: Option<String>, duration: Option<u32>| show_notification(&message, kind, duration),
    ));
    set_fn(&app_ns, "formatDate", Closure::<dyn Fn(String, Option<bool>) -> Result<String, JsValue>>::new(
        |date: String, include_time: Option<bool>| format_date(&date, include_time),
    ));

    let auth_ns = namespace(&window, "auth");
    set_fn(&auth_ns, "checkAuthState", Closure::<dyn Fn() -> bool>::new(check_auth_state));
    set_fn(&auth_ns, "logout", Closure::<dyn Fn()>::new(logout));
    set_fn(&auth_ns, "getAuthHeaders", Closure::<dyn Fn() -> JsValue>::new(get_auth_headers));
    set_fn(&auth_ns, "apiRequest", Closure::<dyn Fn(String, JsValue) -> js_sys::Promise>::new(api_request));
}

/// `window[name]`, created as an empty object unless a page script already
/// defined it.
fn namespace(window: &web_sys::Window, name: &str) -> js_sys::Object {
    let key = JsValue::from_str(name);
    match js_sys::Reflect::get(window, &key).ok().and_then(|v| v.dyn_into::<js_sys::Object>().ok()) {
        Some(existing) => existing,
        None => {
            let object = js_sys::Object::new();
            let _ = js_sys::Reflect::set(window, &key, &object);
            object
        }
    }
}

fn set_fn<F: ?Sized + WasmClosure>(target: &js_sys::Object, name: &str, closure: Closure<F>) {
    let _ = js_sys::Reflect::set(target, &JsValue::from_str(name), &closure.into_js_value());
}
