//! Toast notifications.
//!
//! Toasts stack inside `#notification-container` when the page has one and
//! otherwise float in the top-right corner of `<body>`. Each toast closes
//! itself after its duration or when its `×` button is clicked.
//!
//! ERROR HANDLING
//! ==============
//! A toast must never break the page. DOM failures are downgraded to an
//! error log carrying the message, so the text still reaches the console.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dom::{Dom, DomError, DomEvent, EventKind};
use crate::platform::Window;

pub const CONTAINER_ID: &str = "notification-container";
const BASE_CLASSES: &str = "text-white py-2 px-4 rounded shadow-lg flex items-center";
const STACKED_CLASSES: &str = "mb-2";
const FLOATING_CLASSES: &str = "fixed top-4 right-4 z-50";
const CLOSE_CLASSES: &str = "ml-4 focus:outline-none";
const CLOSE_GLYPH: &str = "\u{00d7}";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    /// Parse a severity name; unknown names fall back to [`Severity::Info`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    /// Background colour class.
    pub fn color_class(self) -> &'static str {
        match self {
            Self::Success => "bg-green-500",
            Self::Error => "bg-red-500",
            Self::Warning => "bg-yellow-500",
            Self::Info => "bg-blue-500",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        }
    }
}

pub struct Notifier<D, W> {
    dom: Rc<D>,
    window: Rc<W>,
}

impl<D, W> Clone for Notifier<D, W> {
    fn clone(&self) -> Self {
        Self { dom: Rc::clone(&self.dom), window: Rc::clone(&self.window) }
    }
}

impl<D, W> Notifier<D, W>
where
    D: Dom + 'static,
    W: Window + 'static,
{
    pub fn new(dom: Rc<D>, window: Rc<W>) -> Self {
        Self { dom, window }
    }

    /// Show `message` for `duration`. Returns the toast element, or `None`
    /// when it could not be rendered and was logged instead.
    pub fn show(&self, message: &str, severity: Severity, duration: Duration) -> Option<D::Node> {
        match self.render(message, severity, duration) {
            Ok(toast) => Some(toast),
            Err(e) => {
                log::error!("{}: {message}", severity.label());
                log::error!("error showing notification: {e}");
                None
            }
        }
    }

    fn render(&self, message: &str, severity: Severity, duration: Duration) -> Result<D::Node, DomError> {
        let dom = &self.dom;
        let toast = dom.create_element("div")?;

        let (parent, placement) = match dom.element_by_id(CONTAINER_ID) {
            Some(container) => (container, STACKED_CLASSES),
            None => (dom.body().ok_or(DomError::NoBody)?, FLOATING_CLASSES),
        };
        dom.set_class_name(&toast, &format!("{} {BASE_CLASSES} {placement}", severity.color_class()));

        let text = dom.create_element("span")?;
        dom.set_text(&text, message);
        dom.append_child(&toast, &text)?;

        let close = dom.create_element("button")?;
        dom.set_class_name(&close, CLOSE_CLASSES);
        dom.set_text(&close, CLOSE_GLYPH);
        dom.append_child(&toast, &close)?;

        dom.append_child(&parent, &toast)?;

        let on_close = (Rc::clone(dom), toast.clone());
        dom.bind(
            &close,
            EventKind::Click,
            Box::new(move |_: &mut DomEvent<D::Node>| on_close.0.remove(&on_close.1)),
        );

        let on_expire = (Rc::clone(dom), toast.clone());
        self.window.set_timeout(
            duration,
            Box::new(move || {
                let (dom, toast) = on_expire;
                if dom.is_attached(&toast) {
                    dom.remove(&toast);
                }
            }),
        );
        Ok(toast)
    }
}
