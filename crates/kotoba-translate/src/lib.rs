//! kotoba-translate
//!
//! The smart-translate chain: built-in dictionary first, the translation
//! proxy second, a placeholder with a reading hint last.

pub mod client;
pub mod error;
pub mod smart;

pub use client::{ProxyTranslator, RemoteTranslator};
pub use smart::{Direction, TranslationResult, TranslationSource, smart_translate};
