use std::env;

use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::audio::AudioConfig;
use self::network::NetworkConfig;

pub mod anki;
pub mod audio;
pub mod network;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Anki Error: no deck name found, please set env {0} to your personal deck")]
    MissingDeck(&'static str),
}

/// Process-wide settings, built once at startup and passed down by reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub anki: AnkiConfig,
    pub audio: AudioConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source instead of the process environment
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            network: NetworkConfig::from_vars(&var),
            anki: AnkiConfig::from_vars(&var),
            audio: AudioConfig::from_vars(&var),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

fn parse_var<T: std::str::FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    var(key).and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_with(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.network.api_url, "http://dict.youdao.com");
        assert_eq!(config.network.request_timeout_ms, 3000);
        assert_eq!(config.anki.url, "http://localhost:8765");
        assert_eq!(config.anki.model, "Basic");
        assert_eq!(config.anki.tag, "from-yd");
        assert_eq!(config.audio.wait_ms, 2000);
        assert!(config.anki.deck.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = config_with(&[
            ("YD_API_URL", "http://localhost:9000/"),
            ("YD_REQUEST_TIMEOUT_MS", "500"),
            ("ANKI_CONNECT_URL", "http://127.0.0.1:8766"),
            ("ANKI_DECK_NAME", "English"),
            ("YD_AUDIO_WAIT_MS", "750"),
        ]);

        assert_eq!(config.network.api_url, "http://localhost:9000");
        assert_eq!(config.network.request_timeout_ms, 500);
        assert_eq!(config.anki.url, "http://127.0.0.1:8766");
        assert_eq!(config.anki.deck().unwrap(), "English");
        assert_eq!(config.audio.wait_ms, 750);
    }

    #[test]
    fn test_unparsable_numbers_use_defaults() {
        let config = config_with(&[("YD_REQUEST_TIMEOUT_MS", "soon"), ("YD_AUDIO_WAIT_MS", "")]);

        assert_eq!(config.network.request_timeout_ms, 3000);
        assert_eq!(config.audio.wait_ms, 2000);
    }

    #[test]
    fn test_missing_or_blank_deck_is_an_error() {
        assert!(matches!(
            Config::default().anki.deck(),
            Err(ConfigError::MissingDeck("ANKI_DECK_NAME"))
        ));

        let config = config_with(&[("ANKI_DECK_NAME", "  ")]);
        assert!(config.anki.deck().is_err());
    }
}
