use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use reqwest::header::AUTHORIZATION;

use kotoba_core::wire::{ProxyConfig, ProxyFailure, TtsRequest, TtsResponse};

use crate::cache::AudioClip;
use crate::error::SpeechError;
use crate::options::TtsOptions;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The proxy always asks the vendor for MP3.
pub const AUDIO_MIME: &str = "audio/mp3";

/// A remote text-to-speech service.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, options: &TtsOptions) -> Result<AudioClip, SpeechError>;
}

/// Client for the hosted `tts-baidu` proxy function.
#[derive(Debug, Clone)]
pub struct ProxySynthesizer {
    http: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl ProxySynthesizer {
    pub fn new(config: &ProxyConfig) -> Result<Self, SpeechError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: reqwest::Client, config: &ProxyConfig) -> Self {
        Self {
            http,
            url: config.function_url(ProxyConfig::TTS_FUNCTION),
            api_key: config.api_key.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Synthesizer for ProxySynthesizer {
    async fn synthesize(&self, text: &str, options: &TtsOptions) -> Result<AudioClip, SpeechError> {
        let body = TtsRequest {
            text: text.to_string(),
            spd: options.spd,
            pit: options.pit,
            vol: options.vol,
            per: options.per,
            lan: options.lang.clone(),
        };

        let mut req = self.http.post(&self.url).json(&body);
        if let Some(key) = &self.api_key {
            req = req.header(AUTHORIZATION, format!("Bearer {key}"));
        }

        tracing::debug!(url = %self.url, lang = %options.lang, "calling speech proxy");

        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        let parsed = serde_json::from_slice::<TtsResponse>(&bytes);

        if !status.is_success() {
            let failure = match parsed {
                Ok(parsed) => parsed.into_audio_content().err(),
                Err(_) => None,
            }
            .unwrap_or_else(|| ProxyFailure {
                error: format!("HTTP {status}"),
                details: None,
                code: None,
            });
            return Err(SpeechError::Status {
                status: status.as_u16(),
                failure,
            });
        }

        let encoded = parsed?.into_audio_content().map_err(SpeechError::Proxy)?;
        let audio = base64::engine::general_purpose::STANDARD.decode(encoded)?;

        tracing::debug!(bytes = audio.len(), "speech synthesized");
        Ok(AudioClip {
            bytes: audio,
            mime: AUDIO_MIME,
        })
    }
}
