use thiserror::Error;

use kotoba_core::wire::ProxyFailure;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("text to speak is empty")]
    EmptyText,

    #[error("no speech proxy configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed proxy response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid audio payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("proxy returned status {status}: {failure}")]
    Status { status: u16, failure: ProxyFailure },

    #[error("proxy error: {0}")]
    Proxy(ProxyFailure),
}
