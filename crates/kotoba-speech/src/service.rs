use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Mutex;

use crate::cache::{AudioCache, AudioClip};
use crate::client::Synthesizer;
use crate::error::SpeechError;
use crate::options::TtsOptions;
use crate::voice::{HostVoice, Utterance};

/// At most this many words are synthesized ahead of time.
pub const PRELOAD_LIMIT: usize = 5;

/// What the caller should play.
#[derive(Debug, Clone, PartialEq)]
pub enum Playback {
    Audio { clip: Arc<AudioClip>, cached: bool },
    Utterance(Utterance),
}

pub struct SpeechService {
    synthesizer: Option<Arc<dyn Synthesizer>>,
    cache: Mutex<AudioCache>,
}

impl SpeechService {
    /// `synthesizer` is `None` when no proxy is configured; every request
    /// then falls back to the host voice.
    pub fn new(synthesizer: Option<Arc<dyn Synthesizer>>) -> Self {
        Self {
            synthesizer,
            cache: Mutex::new(AudioCache::default()),
        }
    }

    /// Remote audio (cached) or, on any failure, a host utterance.
    pub async fn speak(
        &self,
        text: &str,
        options: TtsOptions,
        voices: &[HostVoice],
    ) -> Result<Playback, SpeechError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SpeechError::EmptyText);
        }

        match self.audio(text, options).await {
            Ok((clip, cached)) => Ok(Playback::Audio { clip, cached }),
            Err(e) => {
                tracing::warn!(error = %e, "remote speech failed, using host voice");
                Ok(Playback::Utterance(Utterance::for_text(text, voices)))
            }
        }
    }

    /// Synthesize (or fetch from cache) the audio for `text`. The flag is
    /// `true` when the clip came from the cache.
    pub async fn audio(
        &self,
        text: &str,
        options: TtsOptions,
    ) -> Result<(Arc<AudioClip>, bool), SpeechError> {
        let options = options.normalized();
        let key = options.cache_key(text);

        if let Some(clip) = self.cache.lock().await.get(&key) {
            tracing::debug!(key, "audio cache hit");
            return Ok((clip, true));
        }

        let synthesizer = self.synthesizer.as_ref().ok_or(SpeechError::NotConfigured)?;
        let clip = Arc::new(synthesizer.synthesize(text, &options).await?);
        self.cache.lock().await.insert(key, Arc::clone(&clip));
        Ok((clip, false))
    }

    /// Synthesize the first [`PRELOAD_LIMIT`] words concurrently with
    /// default options. Failures are logged and skipped; returns how many
    /// clips are now cached for those words.
    pub async fn preload(&self, words: &[String]) -> usize {
        let jobs = words.iter().take(PRELOAD_LIMIT).map(|word| async move {
            match self.audio(word, TtsOptions::default()).await {
                Ok(_) => true,
                Err(e) => {
                    tracing::warn!(word = %word, error = %e, "preload failed");
                    false
                }
            }
        });

        let loaded = join_all(jobs).await.into_iter().filter(|ok| *ok).count();
        tracing::info!(loaded, "common words preloaded");
        loaded
    }

    pub async fn clear_cache(&self) -> usize {
        self.cache.lock().await.clear()
    }

    pub async fn cached_clips(&self) -> usize {
        self.cache.lock().await.len()
    }
}
