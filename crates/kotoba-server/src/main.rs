use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use kotoba_server::config::ServerConfig;
use kotoba_server::state::AppState;
use kotoba_speech::{ProxySynthesizer, SpeechService, Synthesizer};
use kotoba_storage::backend::{FileStorage, LocalStorage};
use kotoba_storage::library::Library;
use kotoba_translate::{ProxyTranslator, RemoteTranslator};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    let storage: Box<dyn LocalStorage> = Box::new(FileStorage::open(&config.data_dir)?);
    let library = Library::open(storage)?;

    let (translator, synthesizer) = match &config.proxy {
        Some(proxy) => {
            let translator: Arc<dyn RemoteTranslator> = Arc::new(ProxyTranslator::new(proxy)?);
            let synthesizer: Arc<dyn Synthesizer> = Arc::new(ProxySynthesizer::new(proxy)?);
            tracing::info!(base_url = %proxy.base_url, "proxy functions enabled");
            (Some(translator), Some(synthesizer))
        }
        None => {
            tracing::warn!("KOTOBA_PROXY_URL not set, using local dictionary and host voice only");
            (None, None)
        }
    };

    let state = AppState::new(library, translator, SpeechService::new(synthesizer));
    let app = kotoba_server::app(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(
        bind = %config.bind,
        data_dir = %config.data_dir.display(),
        "kotoba server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
