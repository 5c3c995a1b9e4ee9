use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::WordCategory;

/// A web page saved for later reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LinkItem {
    pub id: String,
    pub url: String,
    pub title: String,
    pub category: WordCategory,
    #[serde(default)]
    pub is_processed: bool,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewLink {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: WordCategory,
    #[serde(default)]
    pub is_processed: bool,
}

impl NewLink {
    /// Trim the inputs and fall back to the URL's host when no title was
    /// given.
    pub fn normalized(mut self) -> Self {
        self.url = self.url.trim().to_string();
        self.title = self.title.trim().to_string();
        if self.title.is_empty() {
            self.title = default_title(&self.url);
        }
        self
    }

    pub fn into_link(self, id: String, created_at: jiff::Timestamp) -> LinkItem {
        LinkItem {
            id,
            url: self.url,
            title: self.title,
            category: self.category,
            is_processed: self.is_processed,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LinkPatch {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<WordCategory>,
    #[serde(default)]
    pub is_processed: Option<bool>,
}

impl LinkPatch {
    pub fn apply(self, link: &mut LinkItem) {
        if let Some(url) = self.url {
            link.url = url;
        }
        if let Some(title) = self.title {
            link.title = title;
        }
        if let Some(category) = self.category {
            link.category = category;
        }
        if let Some(is_processed) = self.is_processed {
            link.is_processed = is_processed;
        }
    }
}

/// Host name of `url`, or the raw string when it does not parse or has no
/// host.
pub fn default_title(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}
