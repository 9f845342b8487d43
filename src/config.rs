//! Page-supplied configuration.
//!
//! Pages may embed `<script id="ui-config" type="application/json">` with
//! any subset of [`UiConfig`]'s fields; everything absent falls back to the
//! defaults below. A malformed block is logged and ignored so a bad template
//! never breaks the page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::theme::ThemeVariant;

pub const CONFIG_ELEMENT_ID: &str = "ui-config";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_NOTIFICATION_MS: u64 = 5000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

/// Local storage key names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub theme: String,
    pub access_token: String,
    pub user_email: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            theme: "theme".to_owned(),
            access_token: "accessToken".to_owned(),
            user_email: "userEmail".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub login_path: String,
    pub storage_keys: StorageKeys,
    pub theme_variant: ThemeVariant,
    pub mobile_breakpoint_px: f64,
    pub notification_duration_ms: u64,
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            storage_keys: StorageKeys::default(),
            theme_variant: ThemeVariant::default(),
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            notification_duration_ms: DEFAULT_NOTIFICATION_MS,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse a JSON config block, filling absent fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON or an unknown log level.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if crate::logging::parse_level(&config.log_level).is_none() {
            return Err(ConfigError::LogLevel(config.log_level));
        }
        Ok(config)
    }

    /// Parse `raw` if present, falling back to defaults on absence or error.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }

    /// Load from the page's `#ui-config` block.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        Self::from_json_or_default(raw.as_deref())
    }

    pub fn notification_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.notification_duration_ms)
    }
}
