mod youdao;

pub use youdao::YoudaoClient;

use yd_core::{DecodeError, LookupResult};

/// Dictionary provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Look up a single word and decode the provider's answer
    async fn lookup(&self, word: &str) -> Result<LookupResult, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
