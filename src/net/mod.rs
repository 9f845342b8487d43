//! Authenticated HTTP requests from page scripts.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ApiClient`] attaches the stored bearer token, normalizes the target URL
//! against the page's scheme, and hands the request to a [`Transport`]. The
//! browser transport is [`crate::web::GlooTransport`] (`gloo-net`); tests use
//! a recording stub.
//!
//! ERROR HANDLING
//! ==============
//! Missing credentials and 401 responses redirect to the login page and
//! surface as [`ApiError`] variants. Transport failures are logged and
//! returned unchanged; nothing is retried.

pub mod client;
pub mod types;
pub mod url;

pub use client::{ApiClient, ApiError};
pub use types::{
    ApiRequest, ApiResponse, Method, OptionsError, RequestOptions, ScriptRequestOptions, Transport, TransportError,
};
pub use url::make_api_url;
