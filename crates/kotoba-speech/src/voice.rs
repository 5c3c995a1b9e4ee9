//! Built-in speech fallback.
//!
//! When remote synthesis is unavailable the host speaks the text with its
//! own engine. This module only decides *how*: language, rate, pitch and
//! which installed voice to prefer.

use serde::{Deserialize, Serialize};

pub const FALLBACK_LANG: &str = "ja-JP";
pub const FALLBACK_RATE: f32 = 0.8;
pub const FALLBACK_PITCH: f32 = 1.0;

/// Name fragments of voices that sound natural for Japanese.
const PREFERRED_NAME_HINTS: [&str; 4] = ["Female", "女性", "Kyoko", "Otoya"];

/// A voice installed on the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostVoice {
    pub name: String,
    pub lang: String,
}

impl HostVoice {
    pub fn is_japanese(&self) -> bool {
        self.lang.contains("ja") || self.lang.contains("JP")
    }
}

/// Instructions for the host speech engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub lang: String,
    pub rate: f32,
    pub pitch: f32,
    /// Name of the voice to use; `None` lets the host pick.
    pub voice: Option<String>,
}

impl Utterance {
    pub fn for_text(text: &str, voices: &[HostVoice]) -> Self {
        Self {
            text: text.to_string(),
            lang: FALLBACK_LANG.to_string(),
            rate: FALLBACK_RATE,
            pitch: FALLBACK_PITCH,
            voice: preferred_voice(voices).map(|v| v.name.clone()),
        }
    }
}

/// First Japanese voice whose name matches a preferred hint, else the
/// first Japanese voice.
pub fn preferred_voice(voices: &[HostVoice]) -> Option<&HostVoice> {
    let mut japanese = voices.iter().filter(|v| v.is_japanese()).peekable();
    let first = japanese.peek().copied();
    japanese
        .find(|v| PREFERRED_NAME_HINTS.iter().any(|hint| v.name.contains(hint)))
        .or(first)
}
