//! Bearer-authenticated request client.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::auth::AuthSession;
use crate::auth::session::{AUTHORIZATION_HEADER, CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE, bearer};
use crate::platform::Window;
use crate::storage::KeyValueStore;

use super::types::{ApiRequest, ApiResponse, RequestOptions, Transport, TransportError};
use super::url::make_api_url;

const UNAUTHORIZED: u16 = 401;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no access token stored")]
    NotAuthenticated,
    #[error("server rejected the access token")]
    Unauthorized,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct ApiClient<T, W, S> {
    transport: Rc<T>,
    session: AuthSession<W, S>,
}

impl<T, W, S> Clone for ApiClient<T, W, S> {
    fn clone(&self) -> Self {
        Self { transport: Rc::clone(&self.transport), session: self.session.clone() }
    }
}

impl<T, W, S> ApiClient<T, W, S>
where
    T: Transport,
    W: Window,
    S: KeyValueStore,
{
    pub fn new(transport: Rc<T>, session: AuthSession<W, S>) -> Self {
        Self { transport, session }
    }

    /// Send `options` to `url` with the stored bearer token.
    ///
    /// Without a token the page is sent to the login route and the transport
    /// is never called. A 401 response logs the user out.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotAuthenticated`] without a token,
    /// [`ApiError::Unauthorized`] on 401, and [`ApiError::Transport`] when
    /// the request never produced a response.
    pub async fn request(&self, url: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
        let Some(token) = self.session.token() else {
            log::warn!("request to {url} without an access token; redirecting to login");
            self.session.redirect_to_login();
            return Err(ApiError::NotAuthenticated);
        };

        let request = self.prepare(url, options, &token);
        log::debug!("{} {}", request.method.as_str(), request.url);

        match self.transport.send(request).await {
            Ok(response) if response.status == UNAUTHORIZED => {
                log::warn!("request to {url} returned 401; logging out");
                self.session.logout();
                Err(ApiError::Unauthorized)
            }
            Ok(response) => Ok(response),
            Err(e) => {
                log::error!("api request error: {e}");
                Err(e.into())
            }
        }
    }

    /// [`Self::request`] and decode a 2xx body as JSON.
    ///
    /// # Errors
    ///
    /// Everything [`Self::request`] returns, plus [`ApiError::Status`] for a
    /// non-2xx response and [`ApiError::Decode`] for a body that is not `R`.
    pub async fn request_json<R: DeserializeOwned>(&self, url: &str, options: RequestOptions) -> Result<R, ApiError> {
        let response = self.request(url, options).await?;
        if !response.ok() {
            return Err(ApiError::Status(response.status));
        }
        Ok(response.json()?)
    }

    fn prepare(&self, url: &str, mut options: RequestOptions, token: &str) -> ApiRequest {
        options.set_header(AUTHORIZATION_HEADER, &bearer(token));
        if options.header_value(CONTENT_TYPE_HEADER).is_none() {
            options.set_header(CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE);
        }
        ApiRequest {
            method: options.method,
            url: make_api_url(url, self.session.window().is_secure()),
            headers: options.headers,
            body: options.body,
        }
    }
}
