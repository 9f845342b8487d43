//! Stored credentials, expiry checks and logout.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::rc::Rc;

use crate::config::UiConfig;
use crate::platform::Window;
use crate::storage::KeyValueStore;

use super::token::decode_claims;

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSettings {
    pub access_token_key: String,
    pub user_email_key: String,
    pub login_path: String,
}

impl From<&UiConfig> for AuthSettings {
    fn from(config: &UiConfig) -> Self {
        Self {
            access_token_key: config.storage_keys.access_token.clone(),
            user_email_key: config.storage_keys.user_email.clone(),
            login_path: config.login_path.clone(),
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self::from(&UiConfig::default())
    }
}

/// Handle over the persisted token and email. Clones share state.
pub struct AuthSession<W, S> {
    window: Rc<W>,
    storage: Rc<S>,
    settings: Rc<AuthSettings>,
}

impl<W, S> Clone for AuthSession<W, S> {
    fn clone(&self) -> Self {
        Self {
            window: Rc::clone(&self.window),
            storage: Rc::clone(&self.storage),
            settings: Rc::clone(&self.settings),
        }
    }
}

impl<W: Window, S: KeyValueStore> AuthSession<W, S> {
    pub fn new(window: Rc<W>, storage: Rc<S>, settings: AuthSettings) -> Self {
        Self { window, storage, settings: Rc::new(settings) }
    }

    pub fn window(&self) -> &Rc<W> {
        &self.window
    }

    /// Stored bearer token; empty values count as absent.
    pub fn token(&self) -> Option<String> {
        self.storage.get(&self.settings.access_token_key).filter(|t| !t.is_empty())
    }

    pub fn user_email(&self) -> Option<String> {
        self.storage.get(&self.settings.user_email_key).filter(|e| !e.is_empty())
    }

    /// Token and email are both present.
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some() && self.user_email().is_some()
    }

    /// Log out unless `token` decodes and has not expired. Returns whether
    /// the token is still usable.
    pub fn verify_token(&self, token: &str) -> bool {
        match decode_claims(token) {
            Ok(claims) if !claims.is_expired_at(self.window.now_ms()) => true,
            Ok(_) => {
                log::warn!("access token expired; logging out");
                self.logout();
                false
            }
            Err(e) => {
                log::error!("token verification error: {e}");
                self.logout();
                false
            }
        }
    }

    /// Clear both stored entries and go to the login page.
    pub fn logout(&self) {
        self.storage.remove(&self.settings.access_token_key);
        self.storage.remove(&self.settings.user_email_key);
        self.redirect_to_login();
    }

    pub fn redirect_to_login(&self) {
        self.window.navigate(&self.settings.login_path);
    }

    /// `Authorization` and `Content-Type` headers for the stored token.
    pub fn auth_headers(&self) -> Option<Vec<(String, String)>> {
        let token = self.token()?;
        Some(vec![
            (AUTHORIZATION_HEADER.to_owned(), bearer(&token)),
            (CONTENT_TYPE_HEADER.to_owned(), JSON_CONTENT_TYPE.to_owned()),
        ])
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
