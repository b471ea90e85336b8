//! Server configuration from environment variables

use std::env;
use std::time::Duration;
use tracing::warn;
use wolfram_query::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

pub const APP_ID_VAR: &str = "WOLFRAM_APP_ID";
pub const API_URL_VAR: &str = "WOLFRAM_API_URL";
pub const TIMEOUT_VAR: &str = "WOLFRAM_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Absent is allowed; queries then fail with a structured error
    pub app_id: Option<String>,
    pub api_url: String,
    pub timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let present = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let timeout = match present(TIMEOUT_VAR) {
            None => DEFAULT_TIMEOUT,
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(value = %raw, "ignoring invalid {}, using {}s", TIMEOUT_VAR, DEFAULT_TIMEOUT.as_secs());
                    DEFAULT_TIMEOUT
                }
            },
        };

        ServerConfig {
            app_id: present(APP_ID_VAR),
            api_url: present(API_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout,
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            app_id: self.app_id.clone(),
            base_url: self.api_url.clone(),
            timeout: self.timeout,
        }
    }
}
