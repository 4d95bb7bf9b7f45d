//! Environment configuration.
//!
//! | variable                  | meaning                              | default                  |
//! |---------------------------|--------------------------------------|--------------------------|
//! | `KAKAO_APP_KEY`           | app key passed to `initialize`       | none (config error)      |
//! | `KAKAO_ACCESS_TOKEN`      | user token used to send messages     | none                     |
//! | `KAKAO_API_BASE`          | REST API base URL                    | `https://kapi.kakao.com` |
//! | `KAKAO_HTTP_TIMEOUT_SECS` | per-request HTTP timeout             | `30`                     |

use std::time::Duration;

use crate::error::ConfigError;

pub const APP_KEY_VAR: &str = "KAKAO_APP_KEY";
pub const ACCESS_TOKEN_VAR: &str = "KAKAO_ACCESS_TOKEN";
pub const API_BASE_VAR: &str = "KAKAO_API_BASE";
pub const TIMEOUT_VAR: &str = "KAKAO_HTTP_TIMEOUT_SECS";

pub const DEFAULT_API_BASE: &str = "https://kapi.kakao.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the share feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareConfig {
    /// Messaging app key. `None` is reported to the user, not raised.
    pub app_key: Option<String>,
    /// User access token for the send endpoint
    pub access_token: Option<String>,
    /// REST API base URL, without trailing slash
    pub api_base: String,
    /// HTTP timeout applied to upload and send
    pub timeout: Duration,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            app_key: None,
            access_token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ShareConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let timeout = match get(TIMEOUT_VAR) {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    key: TIMEOUT_VAR.to_string(),
                    value: raw.clone(),
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            app_key: get(APP_KEY_VAR),
            access_token: get(ACCESS_TOKEN_VAR),
            api_base: get(API_BASE_VAR)
                .map(|b| b.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            timeout,
        })
    }

    /// Override the app key (e.g. from a command-line flag).
    pub fn with_app_key(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.app_key = Some(key);
        }
        self
    }

    /// Override the access token.
    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.access_token = Some(token);
        }
        self
    }

    /// Override the API base URL.
    pub fn with_api_base(mut self, base: Option<String>) -> Self {
        if let Some(base) = base {
            self.api_base = base.trim_end_matches('/').to_string();
        }
        self
    }
}
