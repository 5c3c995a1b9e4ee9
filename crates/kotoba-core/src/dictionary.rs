//! Built-in Japanese → Chinese dictionary of high-frequency words.
//!
//! Lookups are exact matches on the trimmed input. A kanji entry carries
//! its kana reading (furigana); kana entries do not need one.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::models::word::PENDING_TRANSLATION;

/// `(japanese, chinese, furigana)`
const ENTRIES: &[(&str, &str, Option<&str>)] = &[
    // greetings
    ("こんにちは", "你好", None),
    ("ありがとう", "谢谢", None),
    ("すみません", "对不起", None),
    ("はい", "是", None),
    ("いいえ", "不是", None),
    ("おはよう", "早上好", None),
    ("こんばんは", "晚上好", None),
    ("さようなら", "再见", None),
    // numbers
    ("いち", "一", None),
    ("一", "一", Some("いち")),
    ("に", "二", None),
    ("二", "二", Some("に")),
    ("さん", "三", None),
    ("三", "三", Some("さん")),
    // time
    ("いま", "现在", None),
    ("今", "现在", Some("いま")),
    ("きょう", "今天", None),
    ("今日", "今天", Some("きょう")),
    ("あした", "明天", None),
    ("明日", "明天", Some("あした")),
    // food
    ("みず", "水", None),
    ("水", "水", Some("みず")),
    ("ごはん", "米饭", None),
    ("ご飯", "米饭", Some("ごはん")),
    ("パン", "面包", None),
    // loanwords
    ("コーヒー", "咖啡", None),
    ("ホテル", "酒店", None),
    ("レストラン", "餐厅", None),
    ("タクシー", "出租车", None),
    ("バス", "公交车", None),
];

static DICTIONARY: LazyLock<HashMap<&'static str, DictionaryEntry>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .map(|&(japanese, chinese, furigana)| (japanese, DictionaryEntry { chinese, furigana }))
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DictionaryEntry {
    pub chinese: &'static str,
    pub furigana: Option<&'static str>,
}

/// Result of a local lookup. Misses carry the pending placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalTranslation {
    pub chinese: String,
    pub furigana: Option<String>,
}

impl LocalTranslation {
    pub fn is_hit(&self) -> bool {
        self.chinese != PENDING_TRANSLATION
    }
}

pub fn lookup(japanese: &str) -> Option<DictionaryEntry> {
    DICTIONARY.get(japanese.trim()).copied()
}

/// Translate with the built-in table only.
pub fn translate_japanese(japanese: &str) -> LocalTranslation {
    match lookup(japanese) {
        Some(entry) => LocalTranslation {
            chinese: entry.chinese.to_string(),
            furigana: entry.furigana.map(str::to_string),
        },
        None => LocalTranslation {
            chinese: PENDING_TRANSLATION.to_string(),
            furigana: None,
        },
    }
}

/// Translation used when a word is entered without one: the dictionary
/// result for Japanese input, otherwise the pending placeholder.
pub fn auto_translation(input: &str) -> String {
    if is_japanese(input) {
        translate_japanese(input).chinese
    } else {
        PENDING_TRANSLATION.to_string()
    }
}

/// `true` when the text contains hiragana, katakana, or CJK ideographs.
pub fn is_japanese(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c,
            '\u{3040}'..='\u{309F}'
            | '\u{30A0}'..='\u{30FF}'
            | '\u{4E00}'..='\u{9FAF}')
    })
}
