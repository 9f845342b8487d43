use super::*;
use crate::dom::MemoryDom;
use crate::platform::MemoryWindow;
use crate::storage::MemoryStore;

type Manager = ThemeManager<MemoryDom, MemoryWindow, MemoryStore>;

struct Fixture {
    dom: Rc<MemoryDom>,
    window: Rc<MemoryWindow>,
    storage: Rc<MemoryStore>,
    theme: Manager,
}

fn fixture(variant: ThemeVariant) -> Fixture {
    let dom = Rc::new(MemoryDom::new());
    let window = Rc::new(MemoryWindow::new());
    let storage = Rc::new(MemoryStore::new());
    let settings = ThemeSettings {
        storage_key: "theme".to_owned(),
        variant,
        mobile_breakpoint_px: 768.0,
    };
    let theme = ThemeManager::new(Rc::clone(&dom), Rc::clone(&window), Rc::clone(&storage), settings);
    Fixture { dom, window, storage, theme }
}

fn root_is_dark(f: &Fixture) -> bool {
    f.dom.has_class(&f.dom.root_id(), DARK_CLASS)
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_parse_accepts_only_known_values() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
}

// =============================================================
// init
// =============================================================

#[test]
fn init_without_preference_follows_os_dark_and_persists() {
    let f = fixture(ThemeVariant::Simple);
    f.window.set_prefers_dark(Some(true));

    assert_eq!(f.theme.init(), Theme::Dark);
    assert_eq!(f.storage.get("theme").as_deref(), Some("dark"));
    assert!(root_is_dark(&f));
}

#[test]
fn init_without_media_support_defaults_to_light() {
    let f = fixture(ThemeVariant::Simple);
    f.window.set_prefers_dark(None);

    assert_eq!(f.theme.init(), Theme::Light);
    assert_eq!(f.storage.get("theme").as_deref(), Some("light"));
    assert!(!root_is_dark(&f));
}

#[test]
fn init_with_stored_light_never_reads_os_signal() {
    let f = fixture(ThemeVariant::Simple);
    f.storage.set("theme", "light");
    f.window.set_prefers_dark(Some(true));
    f.dom.add_class(&f.dom.root_id(), DARK_CLASS);

    assert_eq!(f.theme.init(), Theme::Light);
    assert_eq!(f.window.preference_reads(), 0);
    assert!(!root_is_dark(&f));
}

#[test]
fn init_ignores_garbage_stored_value() {
    let f = fixture(ThemeVariant::Simple);
    f.storage.set("theme", "purple");
    f.window.set_prefers_dark(Some(true));

    assert_eq!(f.theme.init(), Theme::Dark);
    assert_eq!(f.storage.get("theme").as_deref(), Some("dark"));
}

// =============================================================
// OS preference listener
// =============================================================

#[test]
fn os_change_is_ignored_while_preference_is_stored() {
    let f = fixture(ThemeVariant::Simple);
    f.theme.init();
    assert_eq!(f.window.scheme_listener_count(), 1);

    f.window.change_color_scheme(true);
    assert!(!root_is_dark(&f));
    assert_eq!(f.storage.get("theme").as_deref(), Some("light"));
}

#[test]
fn os_change_applies_when_preference_was_cleared() {
    let f = fixture(ThemeVariant::Simple);
    f.theme.init();
    f.storage.remove("theme");

    f.window.change_color_scheme(true);
    assert!(root_is_dark(&f));
    assert_eq!(f.storage.get("theme").as_deref(), Some("dark"));
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_twice_restores_class_and_storage() {
    let f = fixture(ThemeVariant::Simple);
    f.storage.set("theme", "dark");
    f.theme.init();

    assert_eq!(f.theme.toggle(), Theme::Light);
    assert_eq!(f.storage.get("theme").as_deref(), Some("light"));
    assert_eq!(f.theme.toggle(), Theme::Dark);

    assert!(root_is_dark(&f));
    assert_eq!(f.storage.get("theme").as_deref(), Some("dark"));
}

#[test]
fn toggle_button_click_flips_theme() {
    let f = fixture(ThemeVariant::Simple);
    let button = f.dom.insert(f.dom.body_id(), "button", &[("id", TOGGLE_ELEMENT_ID)]);
    f.theme.init();
    assert!(f.theme.bind_toggle());

    f.dom.click(button);
    assert_eq!(f.theme.current(), Theme::Dark);
    assert_eq!(f.storage.get("theme").as_deref(), Some("dark"));
}

#[test]
fn bind_toggle_without_control_is_noop() {
    let f = fixture(ThemeVariant::Simple);
    assert!(!f.theme.bind_toggle());
}

#[test]
fn simple_variant_never_reloads_or_propagates() {
    let f = fixture(ThemeVariant::Simple);
    let card = f.dom.insert(f.dom.body_id(), "div", &[("class", "bg-white")]);
    f.window.set_inner_width(Some(375.0));
    f.theme.init();

    f.theme.toggle();
    assert_eq!(f.window.reload_count(), 0);
    assert!(!f.dom.has_class(&card, "dark-bg"));
}

// =============================================================
// Propagating variant
// =============================================================

#[test]
fn propagating_variant_marks_each_category() {
    let f = fixture(ThemeVariant::Propagating);
    let body = f.dom.body_id();
    let card = f.dom.insert(body, "div", &[("class", "bg-white border")]);
    let text = f.dom.insert(card, "p", &[("class", "text-gray-700")]);
    let input = f.dom.insert(card, "input", &[]);
    let cell = f.dom.insert(card, "td", &[]);
    let modal = f.dom.insert(body, "div", &[("data-modal", "")]);
    f.window.set_prefers_dark(Some(true));

    f.theme.init();

    assert!(f.dom.has_class(&card, "dark-bg"));
    assert!(f.dom.has_class(&card, "dark-border"));
    assert!(f.dom.has_class(&text, "dark-text"));
    assert!(f.dom.has_class(&input, "dark-input"));
    assert!(f.dom.has_class(&cell, "dark-table"));
    assert!(f.dom.has_class(&modal, "dark-modal"));
}

#[test]
fn propagating_toggle_to_light_strips_markers() {
    let f = fixture(ThemeVariant::Propagating);
    let card = f.dom.insert(f.dom.body_id(), "div", &[("class", "bg-white")]);
    f.storage.set("theme", "dark");
    f.theme.init();
    assert!(f.dom.has_class(&card, "dark-bg"));

    f.theme.toggle();
    assert!(!f.dom.has_class(&card, "dark-bg"));
    assert!(f.dom.has_class(&card, "bg-white"));
}

#[test]
fn propagating_toggle_reloads_only_narrow_viewports() {
    let f = fixture(ThemeVariant::Propagating);
    f.theme.init();

    f.window.set_inner_width(Some(1024.0));
    f.theme.toggle();
    assert_eq!(f.window.reload_count(), 0);

    f.window.set_inner_width(Some(375.0));
    f.theme.toggle();
    assert_eq!(f.window.reload_count(), 1);

    f.window.set_inner_width(None);
    f.theme.toggle();
    assert_eq!(f.window.reload_count(), 1);
}
