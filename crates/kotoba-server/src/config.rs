//! Startup configuration from `KOTOBA_*` environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use kotoba_core::wire::ProxyConfig;

pub const DEFAULT_BIND: &str = "127.0.0.1:8787";
const APP_DIR: &str = "kotoba";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub data_dir: PathBuf,
    /// `None` disables remote translation and synthesis.
    pub proxy: Option<ProxyConfig>,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_raw = var("KOTOBA_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind_raw
            .parse()
            .map_err(|e| eyre::eyre!("invalid KOTOBA_BIND {bind_raw:?}: {e}"))?;

        let data_dir = match var("KOTOBA_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .ok_or_else(|| eyre::eyre!("no platform data directory; set KOTOBA_DATA_DIR"))?
                .join(APP_DIR),
        };

        let proxy = var("KOTOBA_PROXY_URL").map(|base_url| ProxyConfig {
            base_url,
            api_key: var("KOTOBA_PROXY_KEY"),
        });

        Ok(Self {
            bind,
            data_dir,
            proxy,
        })
    }
}
