use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::parse_var;

fn default_api_url() -> String {
    "http://dict.youdao.com".to_string()
}

/// Dictionary API endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Base URL for both `jsonapi` lookups and `dictvoice` audio, no trailing slash
    pub api_url: String,
    pub request_timeout_ms: u64,
}

impl NetworkConfig {
    pub(crate) fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        let api_url = var("YD_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(default_api_url);

        // 3 seconds default
        let request_timeout_ms = parse_var(var, "YD_REQUEST_TIMEOUT_MS").unwrap_or(3000);

        Self {
            api_url,
            request_timeout_ms,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
