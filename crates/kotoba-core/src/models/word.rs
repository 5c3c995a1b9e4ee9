use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::WordCategory;
use crate::error::CoreError;

/// Highest star rating a word can carry. Zero means "not rated yet".
pub const MAX_RATING: u8 = 5;

/// Placeholder stored when no translation is known yet.
pub const PENDING_TRANSLATION: &str = "待翻译";

/// Entries longer than this many characters are treated as phrases when
/// they are pulled out of an image.
pub const PHRASE_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Word {
    pub id: String,
    pub japanese: String,
    pub chinese: String,
    pub category: WordCategory,
    #[serde(default)]
    pub rating: u8,
    pub created_at: jiff::Timestamp,
    /// `true` for sentences, `false` for single words.
    #[serde(default)]
    pub is_phrase: bool,
}

/// Input for creating a word. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewWord {
    pub japanese: String,
    pub chinese: String,
    #[serde(default)]
    pub category: WordCategory,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub is_phrase: bool,
}

impl NewWord {
    pub fn into_word(self, id: String, created_at: jiff::Timestamp) -> Result<Word, CoreError> {
        Ok(Word {
            id,
            japanese: self.japanese,
            chinese: self.chinese,
            category: self.category,
            rating: validate_rating(self.rating)?,
            created_at,
            is_phrase: self.is_phrase,
        })
    }
}

/// Shallow-merge update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WordPatch {
    #[serde(default)]
    pub japanese: Option<String>,
    #[serde(default)]
    pub chinese: Option<String>,
    #[serde(default)]
    pub category: Option<WordCategory>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub is_phrase: Option<bool>,
}

impl WordPatch {
    /// Apply the patch. The word is left unchanged if validation fails.
    pub fn apply(self, word: &mut Word) -> Result<(), CoreError> {
        if let Some(rating) = self.rating {
            word.rating = validate_rating(rating)?;
        }
        if let Some(japanese) = self.japanese {
            word.japanese = japanese;
        }
        if let Some(chinese) = self.chinese {
            word.chinese = chinese;
        }
        if let Some(category) = self.category {
            word.category = category;
        }
        if let Some(is_phrase) = self.is_phrase {
            word.is_phrase = is_phrase;
        }
        Ok(())
    }
}

pub fn validate_rating(rating: u8) -> Result<u8, CoreError> {
    if rating > MAX_RATING {
        return Err(CoreError::InvalidRating(rating));
    }
    Ok(rating)
}

/// Phrase heuristic for bulk-entered lines: anything longer than
/// [`PHRASE_MIN_CHARS`] characters.
pub fn looks_like_phrase(text: &str) -> bool {
    text.chars().count() > PHRASE_MIN_CHARS
}
