use std::sync::Arc;

use tokio::sync::Mutex;

use kotoba_speech::SpeechService;
use kotoba_storage::backend::LocalStorage;
use kotoba_storage::library::Library;
use kotoba_translate::RemoteTranslator;

pub type SharedLibrary = Arc<Mutex<Library<Box<dyn LocalStorage>>>>;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub library: SharedLibrary,
    /// `None` when no translation proxy is configured.
    pub translator: Option<Arc<dyn RemoteTranslator>>,
    pub speech: Arc<SpeechService>,
}

impl AppState {
    pub fn new(
        library: Library<Box<dyn LocalStorage>>,
        translator: Option<Arc<dyn RemoteTranslator>>,
        speech: SpeechService,
    ) -> Self {
        Self {
            library: Arc::new(Mutex::new(library)),
            translator,
            speech: Arc::new(speech),
        }
    }
}
