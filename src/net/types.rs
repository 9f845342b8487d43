//! Request/response values and the transport seam.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::future::Future;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Case-insensitive method name.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "PATCH" => Some(Self::Patch),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// Caller-supplied request options. Header names compare case-insensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self { method, ..Self::default() }
    }

    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    pub fn post() -> Self {
        Self::new(Method::Post)
    }

    /// Set `name`, replacing any existing value.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.set_header(name, value);
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the request body.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `value` cannot be encoded as JSON.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, serde_json::Error> {
        Ok(self.body(serde_json::to_string(value)?))
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }

    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.to_owned()));
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("request options are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported method '{0}'")]
    Method(String),
}

/// The `fetch`-style options object page scripts pass to `apiRequest`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScriptRequestOptions {
    pub method: Option<String>,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl ScriptRequestOptions {
    /// Parse the JSON form of the options object.
    ///
    /// # Errors
    ///
    /// [`OptionsError::Json`] when `raw` does not match the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Convert to [`RequestOptions`]; the method defaults to GET.
    ///
    /// # Errors
    ///
    /// [`OptionsError::Method`] for a method name [`Method::parse`] rejects.
    pub fn into_options(self) -> Result<RequestOptions, OptionsError> {
        let method = match self.method.as_deref() {
            Some(raw) => Method::parse(raw).ok_or_else(|| OptionsError::Method(raw.to_owned()))?,
            None => Method::Get,
        };
        let mut options = RequestOptions::new(method);
        for (name, value) in &self.headers {
            options.set_header(name, value);
        }
        options.body = self.body;
        Ok(options)
    }
}

/// Fully prepared request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into(), ..Self::default() }
    }

    /// First value for header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }

    /// Status in the 2xx range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the deserializer error for a body that does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("request could not be built: {0}")]
    Build(String),
}

/// Sends one request; no retries or timeouts beyond the platform's own.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, TransportError>>;
}
