use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use yd_core::LookupResult;

use crate::{ProviderMetadata, TranslateError, Translator};

const API_KEY_FROM: &str = "mac.main";
const API_VENDOR: &str = "appstore";
const API_APP_VERSION: &str = "2.4.0";
const API_CLIENT_FROM: &str = "macdict";

#[derive(Clone)]
pub struct YoudaoClient {
    client: reqwest::Client,
    api_url: String,
}

impl YoudaoClient {
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, api_url })
    }

    fn lookup_url(&self, word: &str) -> Result<Url, TranslateError> {
        let params = [
            ("q", word),
            ("doctype", "json"),
            ("keyfrom", API_KEY_FROM),
            ("vendor", API_VENDOR),
            ("appVer", API_APP_VERSION),
            ("client", API_CLIENT_FROM),
            ("jsonversion", "2"),
        ];

        Url::parse_with_params(&format!("{}/jsonapi", self.api_url), &params)
            .map_err(|e| TranslateError::ApiError(format!("Invalid API URL: {}", e)))
    }
}

#[async_trait]
impl Translator for YoudaoClient {
    async fn lookup(&self, word: &str) -> Result<LookupResult, TranslateError> {
        let url = self.lookup_url(word)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response.bytes().await?;
        tracing::debug!("Received {} bytes for {:?}", body.len(), word);

        Ok(LookupResult::decode(&body, word)?)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Youdao".to_string(),
        }
    }
}
