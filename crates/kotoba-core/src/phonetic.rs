//! Reading suggestions for input the translators could not handle.
//!
//! A reading is only offered when it can be derived without guessing: the
//! input is already kana, or the dictionary knows the kanji's furigana.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use wana_kana::{ConvertJapanese, IsJapaneseStr};

use crate::dictionary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reading {
    pub kana: String,
    pub romaji: String,
}

pub fn suggest(text: &str) -> Option<Reading> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let kana = match dictionary::lookup(text).and_then(|e| e.furigana) {
        Some(furigana) => furigana.to_string(),
        None if text.is_kana() => text.to_string(),
        None => return None,
    };

    let romaji = kana.as_str().to_romaji();
    Some(Reading { kana, romaji })
}
