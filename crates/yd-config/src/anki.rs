use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, parse_var};

pub const DECK_VAR: &str = "ANKI_DECK_NAME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnkiConfig {
    /// AnkiConnect URL
    pub url: String,
    /// Target deck, only required when adding notes
    pub deck: Option<String>,
    /// Note type name
    pub model: String,
    /// Tag attached to every created note
    pub tag: String,
    pub timeout_ms: u64,
}

impl AnkiConfig {
    pub(crate) fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        let url = var("ANKI_CONNECT_URL").unwrap_or_else(|| "http://localhost:8765".to_string());

        let deck = var(DECK_VAR)
            .map(|deck| deck.trim().to_string())
            .filter(|deck| !deck.is_empty());

        Self {
            url,
            deck,
            model: "Basic".to_string(),
            tag: "from-yd".to_string(),
            timeout_ms: parse_var(var, "ANKI_TIMEOUT_MS").unwrap_or(3000),
        }
    }

    pub fn deck(&self) -> Result<&str, ConfigError> {
        self.deck
            .as_deref()
            .ok_or(ConfigError::MissingDeck(DECK_VAR))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
