//! Dictionary-first translation with remote fallback.
//!
//! Japanese → Chinese tries the built-in dictionary, then the remote
//! translator. Chinese → Japanese always goes remote and then looks the
//! result up for furigana. Remote failures never surface as errors: they
//! are logged and replaced by [`FAILED_TRANSLATION`], together with a
//! reading suggestion when one can be derived.

use serde::{Deserialize, Serialize};

use kotoba_core::dictionary;
use kotoba_core::phonetic::{self, Reading};

use crate::client::RemoteTranslator;
use crate::error::TranslateError;

/// Shown in place of a translation when every step failed.
pub const FAILED_TRANSLATION: &str = "翻译失败";

const LANG_JAPANESE: &str = "jp";
const LANG_CHINESE: &str = "zh";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "jp-to-zh")]
    JpToZh,
    #[default]
    #[serde(rename = "zh-to-jp")]
    ZhToJp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationSource {
    Local,
    Api,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub japanese: String,
    pub chinese: String,
    pub source: TranslationSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furigana: Option<String>,
    /// Reading hint offered when the remote step failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<Reading>,
}

impl TranslationResult {
    pub fn failed(&self) -> bool {
        self.japanese == FAILED_TRANSLATION || self.chinese == FAILED_TRANSLATION
    }
}

/// Run the translation chain. Only empty input is an error.
///
/// `remote` is `None` when no proxy is configured; the chain then behaves
/// as if the remote call failed.
pub async fn smart_translate(
    remote: Option<&dyn RemoteTranslator>,
    text: &str,
    direction: Direction,
) -> Result<TranslationResult, TranslateError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TranslateError::EmptyText);
    }

    let result = match direction {
        Direction::JpToZh => {
            let local = dictionary::translate_japanese(text);
            if local.is_hit() {
                return Ok(TranslationResult {
                    japanese: text.to_string(),
                    chinese: local.chinese,
                    source: TranslationSource::Local,
                    furigana: local.furigana,
                    reading: None,
                });
            }

            match call_remote(remote, text, LANG_JAPANESE, LANG_CHINESE).await {
                Ok(chinese) => TranslationResult {
                    japanese: text.to_string(),
                    chinese,
                    source: TranslationSource::Api,
                    furigana: None,
                    reading: None,
                },
                Err(_) => TranslationResult {
                    japanese: text.to_string(),
                    chinese: FAILED_TRANSLATION.to_string(),
                    source: TranslationSource::Api,
                    furigana: None,
                    reading: phonetic::suggest(text),
                },
            }
        }
        Direction::ZhToJp => match call_remote(remote, text, LANG_CHINESE, LANG_JAPANESE).await {
            Ok(japanese) => {
                let furigana = dictionary::translate_japanese(&japanese).furigana;
                TranslationResult {
                    japanese,
                    chinese: text.to_string(),
                    source: TranslationSource::Api,
                    furigana,
                    reading: None,
                }
            }
            Err(_) => TranslationResult {
                japanese: FAILED_TRANSLATION.to_string(),
                chinese: text.to_string(),
                source: TranslationSource::Api,
                furigana: None,
                reading: None,
            },
        },
    };

    Ok(result)
}

async fn call_remote(
    remote: Option<&dyn RemoteTranslator>,
    text: &str,
    from: &str,
    to: &str,
) -> Result<String, TranslateError> {
    let result = match remote {
        Some(remote) => remote.translate(text, from, to).await,
        None => Err(TranslateError::NotConfigured),
    };
    if let Err(e) = &result {
        tracing::warn!(from, to, error = %e, "remote translation failed");
    }
    result
}
