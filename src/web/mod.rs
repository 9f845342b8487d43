//! Browser implementations of the platform seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`WebDom`], [`WebWindow`] and [`GlooTransport`] back
//! [`crate::dom::Dom`], [`crate::platform::Window`] and
//! [`crate::net::Transport`] with `web-sys`, `gloo-timers` and `gloo-net`.
//! Only compiled with the `hydrate` feature; native builds test the same
//! logic against the in-memory fakes.
//!
//! Event closures are leaked with `Closure::forget`. Every listener here is
//! bound once per page load and lives as long as the page.

mod dom;
mod transport;
mod window;

pub use dom::WebDom;
pub use transport::GlooTransport;
pub use window::WebWindow;
