use axum::extract::State;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use kotoba_speech::Playback;
use kotoba_speech::options::{TtsOptions, VOICE_OPTIONS, VoiceOptions};
use kotoba_speech::voice::{HostVoice, Utterance};

use crate::error::ApiError;
use crate::extract::Json;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    pub text: String,
    #[serde(default)]
    pub options: TtsOptions,
    /// Voices installed on the caller's machine, for the fallback.
    #[serde(default)]
    pub voices: Vec<HostVoice>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpeakResponse {
    Audio {
        #[serde(rename = "audioContent")]
        audio_content: String,
        mime: &'static str,
        cached: bool,
    },
    Utterance(Utterance),
}

impl From<Playback> for SpeakResponse {
    fn from(playback: Playback) -> Self {
        match playback {
            Playback::Audio { clip, cached } => SpeakResponse::Audio {
                audio_content: STANDARD.encode(&clip.bytes),
                mime: clip.mime,
                cached,
            },
            Playback::Utterance(utterance) => SpeakResponse::Utterance(utterance),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PreloadRequest {
    pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PreloadResponse {
    pub loaded: usize,
}

#[derive(Debug, Serialize)]
pub struct ClearCacheResponse {
    pub cleared: usize,
}

pub async fn speak(
    State(state): State<AppState>,
    Json(req): Json<SpeakRequest>,
) -> Result<Json<SpeakResponse>, ApiError> {
    let playback = state.speech.speak(&req.text, req.options, &req.voices).await?;
    Ok(Json(playback.into()))
}

pub async fn voice_options() -> Json<VoiceOptions> {
    Json(VOICE_OPTIONS)
}

pub async fn preload(
    State(state): State<AppState>,
    Json(req): Json<PreloadRequest>,
) -> Result<Json<PreloadResponse>, ApiError> {
    let loaded = state.speech.preload(&req.words).await;
    Ok(Json(PreloadResponse { loaded }))
}

pub async fn clear_cache(State(state): State<AppState>) -> Result<Json<ClearCacheResponse>, ApiError> {
    let cleared = state.speech.clear_cache().await;
    Ok(Json(ClearCacheResponse { cleared }))
}
