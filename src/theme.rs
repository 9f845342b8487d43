//! Light/dark theme state.
//!
//! Reads the user's preference from storage, falling back to the OS
//! `prefers-color-scheme` signal, and applies the `dark` class to the
//! `<html>` element. Toggle writes the new preference back to storage.
//!
//! VARIANTS
//! ========
//! [`ThemeVariant::Simple`] only flips the root class. [`ThemeVariant::Propagating`]
//! additionally stamps a per-element dark marker class over the selector
//! categories in [`DARK_PROPAGATION`], for utility-class markup that the
//! root class alone cannot restyle, and reloads narrow viewports after a
//! toggle so every element re-renders consistently.
//!
//! Missing elements or storage make every operation a silent no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::dom::{Dom, DomEvent, EventKind};
use crate::platform::Window;
use crate::storage::KeyValueStore;

/// Marker class on `<html>` while dark mode is active.
pub const DARK_CLASS: &str = "dark";
pub const TOGGLE_ELEMENT_ID: &str = "theme-toggle";

/// `(selector, dark marker class)` pairs applied by the propagating variant.
pub const DARK_PROPAGATION: &[(&str, &str)] = &[
    (".bg-white, .bg-gray-50, .bg-gray-100, .bg-gray-200", "dark-bg"),
    (".text-gray-900, .text-gray-800, .text-gray-700, .text-gray-600, .text-black", "dark-text"),
    (".border, .border-gray-200, .border-gray-300", "dark-border"),
    ("input, select, textarea", "dark-input"),
    ("table, thead, tbody, tr, th, td", "dark-table"),
    ("[data-modal], .modal-content", "dark-modal"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value; anything other than `dark`/`light` is ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Simple,
    Propagating,
}

/// Theme settings drawn from [`crate::config::UiConfig`].
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeSettings {
    pub storage_key: String,
    pub variant: ThemeVariant,
    pub mobile_breakpoint_px: f64,
}

impl From<&crate::config::UiConfig> for ThemeSettings {
    fn from(config: &crate::config::UiConfig) -> Self {
        Self {
            storage_key: config.storage_keys.theme.clone(),
            variant: config.theme_variant,
            mobile_breakpoint_px: config.mobile_breakpoint_px,
        }
    }
}

/// Applies and persists the theme. Cheap to clone; clones share state.
pub struct ThemeManager<D, W, S> {
    dom: Rc<D>,
    window: Rc<W>,
    storage: Rc<S>,
    settings: Rc<ThemeSettings>,
}

impl<D, W, S> Clone for ThemeManager<D, W, S> {
    fn clone(&self) -> Self {
        Self {
            dom: Rc::clone(&self.dom),
            window: Rc::clone(&self.window),
            storage: Rc::clone(&self.storage),
            settings: Rc::clone(&self.settings),
        }
    }
}

impl<D, W, S> ThemeManager<D, W, S>
where
    D: Dom + 'static,
    W: Window + 'static,
    S: KeyValueStore + 'static,
{
    pub fn new(dom: Rc<D>, window: Rc<W>, storage: Rc<S>, settings: ThemeSettings) -> Self {
        Self { dom, window, storage, settings: Rc::new(settings) }
    }

    /// Persisted preference, if any.
    pub fn stored(&self) -> Option<Theme> {
        self.storage.get(&self.settings.storage_key).as_deref().and_then(Theme::parse)
    }

    /// Theme implied by the OS; light when media queries are unsupported.
    pub fn system(&self) -> Theme {
        Theme::from_dark(self.window.prefers_dark().unwrap_or(false))
    }

    /// Theme currently shown, read from the root marker class.
    pub fn current(&self) -> Theme {
        Theme::from_dark(self.dom.root().is_some_and(|root| self.dom.has_class(&root, DARK_CLASS)))
    }

    /// Decide, persist and apply the initial theme, then start following the
    /// OS preference while no explicit preference is stored.
    pub fn init(&self) -> Theme {
        let theme = if let Some(theme) = self.stored() {
            theme
        } else {
            let theme = self.system();
            self.persist(theme);
            theme
        };
        self.apply(theme);
        self.watch_system_preference();
        log::debug!("theme initialized: {}", theme.as_str());
        theme
    }

    /// Apply `theme` to the document without persisting it.
    pub fn apply(&self, theme: Theme) {
        if let Some(root) = self.dom.root() {
            if theme.is_dark() {
                self.dom.add_class(&root, DARK_CLASS);
            } else {
                self.dom.remove_class(&root, DARK_CLASS);
            }
        }
        if self.settings.variant == ThemeVariant::Propagating {
            self.propagate(theme);
        }
    }

    /// Flip the theme and persist the result.
    pub fn toggle(&self) -> Theme {
        let next = match self.dom.root() {
            Some(root) => Theme::from_dark(self.dom.toggle_class(&root, DARK_CLASS)),
            None => self.current().toggled(),
        };
        if self.settings.variant == ThemeVariant::Propagating {
            self.propagate(next);
        }
        self.persist(next);
        log::debug!("theme toggled to {}", next.as_str());

        if self.settings.variant == ThemeVariant::Propagating && self.is_narrow_viewport() {
            self.window.reload();
        }
        next
    }

    /// Bind `#theme-toggle` clicks to [`Self::toggle`]. Returns whether the
    /// control exists.
    pub fn bind_toggle(&self) -> bool {
        let Some(button) = self.dom.element_by_id(TOGGLE_ELEMENT_ID) else {
            return false;
        };
        let manager = self.clone();
        self.dom.bind(
            &button,
            EventKind::Click,
            Box::new(move |_: &mut DomEvent<D::Node>| {
                manager.toggle();
            }),
        );
        true
    }

    /// Re-apply and persist the OS preference when it changes, unless the
    /// user already has a stored preference.
    pub fn watch_system_preference(&self) {
        let manager = self.clone();
        self.window.on_color_scheme_change(Box::new(move |dark| {
            if manager.stored().is_some() {
                return;
            }
            let theme = Theme::from_dark(dark);
            manager.apply(theme);
            manager.persist(theme);
        }));
    }

    fn persist(&self, theme: Theme) {
        self.storage.set(&self.settings.storage_key, theme.as_str());
    }

    fn propagate(&self, theme: Theme) {
        for (selector, class) in DARK_PROPAGATION {
            for node in self.dom.query_all(selector) {
                if theme.is_dark() {
                    self.dom.add_class(&node, class);
                } else {
                    self.dom.remove_class(&node, class);
                }
            }
        }
    }

    fn is_narrow_viewport(&self) -> bool {
        self.window.inner_width().is_some_and(|w| w < self.settings.mobile_breakpoint_px)
    }
}
