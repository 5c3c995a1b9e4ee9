use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};

use kotoba_core::wire::{ProxyConfig, ProxyFailure, TranslateRequest, TranslateResponse};

use crate::error::TranslateError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A remote machine-translation service.
#[async_trait]
pub trait RemoteTranslator: Send + Sync {
    /// Translate `text` between vendor language codes (`jp`, `zh`, ...).
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, TranslateError>;
}

/// Client for the hosted `translate` proxy function.
#[derive(Debug, Clone)]
pub struct ProxyTranslator {
    http: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl ProxyTranslator {
    pub fn new(config: &ProxyConfig) -> Result<Self, TranslateError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: reqwest::Client, config: &ProxyConfig) -> Self {
        Self {
            http,
            url: config.function_url(ProxyConfig::TRANSLATE_FUNCTION),
            api_key: config.api_key.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RemoteTranslator for ProxyTranslator {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, TranslateError> {
        let body = TranslateRequest {
            text: text.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        };

        let mut req = self
            .http
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .json(&body);
        if let Some(key) = &self.api_key {
            req = req.header(AUTHORIZATION, format!("Bearer {key}"));
        }

        tracing::debug!(url = %self.url, from, to, chars = text.chars().count(), "calling translation proxy");

        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        let parsed = serde_json::from_slice::<TranslateResponse>(&bytes);

        if !status.is_success() {
            let failure = match parsed {
                Ok(parsed) => parsed.into_result().err(),
                Err(_) => None,
            }
            .unwrap_or_else(|| ProxyFailure {
                error: format!("HTTP {status}"),
                details: None,
                code: None,
            });
            return Err(TranslateError::Status {
                status: status.as_u16(),
                failure,
            });
        }

        parsed?.into_result().map_err(TranslateError::Proxy)
    }
}
