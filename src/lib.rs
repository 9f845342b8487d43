//! # household-ui
//!
//! WASM helpers loaded on every page of the household-management web app:
//! theme switching, tooltip/modal/confirmation wiring, notification toasts,
//! date formatting, and the bearer-token auth helper.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Page bootstrap that wires every helper on load |
//! | [`theme`] | Light/dark state, persistence and OS preference listener |
//! | [`ui`] | Tooltips, modals, confirmations and notification toasts |
//! | [`auth`] | Token storage, expiry inspection and logged-in chrome |
//! | [`net`] | Authenticated request client over a pluggable transport |
//! | [`dom`] | DOM access trait plus an in-memory document for tests |
//! | [`platform`] | Window services (timers, navigation, media queries) |
//! | [`storage`] | Key-value persistence trait over `localStorage` |
//! | [`config`] | Page-supplied configuration with defaults |
//! | [`format`] | en-US date formatting |
//! | [`pages`] | Path-keyed page initialization |
//! | [`logging`] | Log level parsing and console logger install |
//!
//! Browser bindings (`web-sys`, `gloo-net`) live behind the `hydrate`
//! feature; everything else runs natively against the in-memory fakes.

pub mod app;
pub mod auth;
#[cfg(feature = "hydrate")]
pub mod bindings;
pub mod config;
pub mod dom;
pub mod format;
pub mod logging;
pub mod net;
pub mod pages;
pub mod platform;
pub mod storage;
pub mod theme;
pub mod ui;
#[cfg(feature = "hydrate")]
pub mod web;
