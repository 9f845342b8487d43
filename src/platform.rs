//! Window-level services: prompts, navigation, timers, media queries.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the helpers need from `window` besides the document itself.
//! The browser implementation is [`crate::web::WebWindow`]; tests use
//! [`MemoryWindow`], whose clock only moves when [`MemoryWindow::advance`]
//! is called.

#[cfg(test)]
#[path = "platform_test.rs"]
mod platform_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Callback for OS color-scheme changes; receives `true` when dark is preferred.
pub type SchemeListener = Box<dyn FnMut(bool)>;

pub trait Window {
    /// Blocking yes/no prompt.
    fn confirm(&self, message: &str) -> bool;
    /// Navigate the page to `path`.
    fn navigate(&self, path: &str);
    fn reload(&self);
    /// Viewport width in CSS pixels, if known.
    fn inner_width(&self) -> Option<f64>;
    /// Current `(prefers-color-scheme: dark)` result; `None` when media
    /// queries are unsupported.
    fn prefers_dark(&self) -> Option<bool>;
    fn on_color_scheme_change(&self, listener: SchemeListener);
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>);
    /// Whether the page itself was served over `https:`.
    fn is_secure(&self) -> bool;
    fn pathname(&self) -> String;
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;
}

struct Timer {
    due_ms: u64,
    seq: u64,
    callback: Box<dyn FnOnce()>,
}

/// Scriptable window for tests.
pub struct MemoryWindow {
    now_ms: Cell<u64>,
    timers: RefCell<Vec<Timer>>,
    next_seq: Cell<u64>,
    confirm_answer: Cell<bool>,
    confirms: RefCell<Vec<String>>,
    navigations: RefCell<Vec<String>>,
    reloads: Cell<usize>,
    width: Cell<Option<f64>>,
    prefers_dark: Cell<Option<bool>>,
    preference_reads: Cell<usize>,
    scheme_listeners: RefCell<Vec<Rc<RefCell<SchemeListener>>>>,
    secure: Cell<bool>,
    pathname: RefCell<String>,
}

impl Default for MemoryWindow {
    fn default() -> Self {
        Self {
            now_ms: Cell::new(0),
            timers: RefCell::new(Vec::new()),
            next_seq: Cell::new(0),
            confirm_answer: Cell::new(true),
            confirms: RefCell::new(Vec::new()),
            navigations: RefCell::new(Vec::new()),
            reloads: Cell::new(0),
            width: Cell::new(Some(1280.0)),
            prefers_dark: Cell::new(Some(false)),
            preference_reads: Cell::new(0),
            scheme_listeners: RefCell::new(Vec::new()),
            secure: Cell::new(false),
            pathname: RefCell::new("/".to_owned()),
        }
    }
}

impl std::fmt::Debug for MemoryWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryWindow")
            .field("now_ms", &self.now_ms.get())
            .field("pending_timers", &self.timers.borrow().len())
            .field("navigations", &self.navigations.borrow())
            .finish_non_exhaustive()
    }
}

impl MemoryWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_now_ms(&self, now_ms: u64) {
        self.now_ms.set(now_ms);
    }

    /// Answer returned by later `confirm` prompts.
    pub fn answer_confirms(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    pub fn set_inner_width(&self, width: Option<f64>) {
        self.width.set(width);
    }

    pub fn set_secure(&self, secure: bool) {
        self.secure.set(secure);
    }

    pub fn set_pathname(&self, path: &str) {
        *self.pathname.borrow_mut() = path.to_owned();
    }

    /// Set the OS preference without notifying listeners.
    pub fn set_prefers_dark(&self, prefers: Option<bool>) {
        self.prefers_dark.set(prefers);
    }

    /// Change the OS preference and notify registered listeners.
    pub fn change_color_scheme(&self, dark: bool) {
        self.prefers_dark.set(Some(dark));
        let listeners: Vec<_> = self.scheme_listeners.borrow().iter().map(Rc::clone).collect();
        for listener in listeners {
            (listener.borrow_mut())(dark);
        }
    }

    /// Move the clock forward, firing due timers in order.
    pub fn advance(&self, by: Duration) {
        let target = self.now_ms.get() + u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        loop {
            let next = {
                let mut timers = self.timers.borrow_mut();
                let due = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| (t.due_ms, t.seq))
                    .map(|(i, _)| i);
                due.map(|i| timers.swap_remove(i))
            };
            let Some(timer) = next else { break };
            self.now_ms.set(timer.due_ms.max(self.now_ms.get()));
            (timer.callback)();
        }
        self.now_ms.set(target);
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn confirm_messages(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn reload_count(&self) -> usize {
        self.reloads.get()
    }

    /// How many times the OS preference was read.
    pub fn preference_reads(&self) -> usize {
        self.preference_reads.get()
    }

    pub fn scheme_listener_count(&self) -> usize {
        self.scheme_listeners.borrow().len()
    }
}

impl Window for MemoryWindow {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_owned());
        self.confirm_answer.get()
    }

    fn navigate(&self, path: &str) {
        self.navigations.borrow_mut().push(path.to_owned());
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }

    fn inner_width(&self) -> Option<f64> {
        self.width.get()
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.preference_reads.set(self.preference_reads.get() + 1);
        self.prefers_dark.get()
    }

    fn on_color_scheme_change(&self, listener: SchemeListener) {
        self.scheme_listeners.borrow_mut().push(Rc::new(RefCell::new(listener)));
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        let due_ms = self.now_ms.get() + u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.timers.borrow_mut().push(Timer { due_ms, seq, callback });
    }

    fn is_secure(&self) -> bool {
        self.secure.get()
    }

    fn pathname(&self) -> String {
        self.pathname.borrow().clone()
    }

    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}
