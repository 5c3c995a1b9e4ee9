//! kotoba-speech
//!
//! Pronunciation playback. Audio is synthesized by the hosted TTS proxy
//! and cached per text and voice settings; when that fails the host's
//! built-in speech engine is asked to speak instead.

pub mod cache;
pub mod client;
pub mod error;
pub mod options;
pub mod service;
pub mod voice;

pub use client::{ProxySynthesizer, Synthesizer};
pub use service::{Playback, SpeechService};
