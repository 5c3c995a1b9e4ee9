//! Client-side filtering and ordering over the in-memory collections.
//!
//! All sorts are stable: records with equal keys keep their stored order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::category::WordCategory;
use crate::models::image::ImageItem;
use crate::models::link::LinkItem;
use crate::models::word::Word;

/// Parse a category selector as the list views send it: `all` (or nothing)
/// accepts every category, anything else must name one.
pub fn parse_category_filter(raw: &str) -> Result<Option<WordCategory>, CoreError> {
    match raw.trim() {
        "" | "all" => Ok(None),
        name => name.parse().map(Some),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WordKind {
    #[default]
    All,
    Word,
    Phrase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum SortBy {
    #[default]
    CreatedAt,
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordFilter {
    /// Substring matched against both the Japanese and the translation.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub kind: WordKind,
    /// Accepted ratings. Empty accepts any.
    #[serde(default)]
    pub ratings: Vec<u8>,
    /// `None` accepts every category.
    #[serde(default)]
    pub category: Option<WordCategory>,
}

impl WordFilter {
    pub fn matches(&self, word: &Word) -> bool {
        let matches_search = self.search.is_empty()
            || word.japanese.contains(&self.search)
            || word.chinese.contains(&self.search);
        let matches_kind = match self.kind {
            WordKind::All => true,
            WordKind::Word => !word.is_phrase,
            WordKind::Phrase => word.is_phrase,
        };
        let matches_rating = self.ratings.is_empty() || self.ratings.contains(&word.rating);
        let matches_category = self.category.is_none_or(|c| c == word.category);

        matches_search && matches_kind && matches_rating && matches_category
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordSort {
    #[serde(default)]
    pub by: SortBy,
    #[serde(default)]
    pub order: SortOrder,
}

pub fn filter_words(words: &[Word], filter: &WordFilter, sort: WordSort) -> Vec<Word> {
    let mut out: Vec<Word> = words.iter().filter(|w| filter.matches(w)).cloned().collect();
    out.sort_by(|a, b| {
        let ord = match sort.by {
            SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
            SortBy::Rating => a.rating.cmp(&b.rating),
        };
        sort.order.apply(ord)
    });
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ArchiveFilter {
    #[default]
    All,
    Archived,
    Unarchived,
}

pub fn filter_images(images: &[ImageItem], filter: ArchiveFilter, order: SortOrder) -> Vec<ImageItem> {
    let mut out: Vec<ImageItem> = images
        .iter()
        .filter(|img| match filter {
            ArchiveFilter::All => true,
            ArchiveFilter::Archived => img.is_archived,
            ArchiveFilter::Unarchived => !img.is_archived,
        })
        .cloned()
        .collect();
    out.sort_by(|a, b| order.apply(a.created_at.cmp(&b.created_at)));
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProcessedFilter {
    #[default]
    All,
    Processed,
    Unprocessed,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LinkFilter {
    #[serde(default)]
    pub processed: ProcessedFilter,
    #[serde(default)]
    pub category: Option<WordCategory>,
}

impl LinkFilter {
    pub fn matches(&self, link: &LinkItem) -> bool {
        let matches_processed = match self.processed {
            ProcessedFilter::All => true,
            ProcessedFilter::Processed => link.is_processed,
            ProcessedFilter::Unprocessed => !link.is_processed,
        };
        matches_processed && self.category.is_none_or(|c| c == link.category)
    }
}

pub fn filter_links(links: &[LinkItem], filter: LinkFilter, order: SortOrder) -> Vec<LinkItem> {
    let mut out: Vec<LinkItem> = links.iter().filter(|l| filter.matches(l)).cloned().collect();
    out.sort_by(|a, b| order.apply(a.created_at.cmp(&b.created_at)));
    out
}
