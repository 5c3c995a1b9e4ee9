use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A screenshot or photo kept for later word mining. `url` is usually a
/// `data:` URL holding the whole image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ImageItem {
    pub id: String,
    pub url: String,
    pub name: String,
    pub created_at: jiff::Timestamp,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_words: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewImage {
    pub url: String,
    pub name: String,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub extracted_words: Option<Vec<String>>,
}

impl NewImage {
    pub fn into_image(self, id: String, created_at: jiff::Timestamp) -> ImageItem {
        ImageItem {
            id,
            url: self.url,
            name: self.name,
            created_at,
            is_archived: self.is_archived,
            extracted_words: self.extracted_words,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ImagePatch {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_archived: Option<bool>,
    #[serde(default)]
    pub extracted_words: Option<Vec<String>>,
}

impl ImagePatch {
    pub fn apply(self, image: &mut ImageItem) {
        if let Some(url) = self.url {
            image.url = url;
        }
        if let Some(name) = self.name {
            image.name = name;
        }
        if let Some(is_archived) = self.is_archived {
            image.is_archived = is_archived;
        }
        if let Some(words) = self.extracted_words {
            image.extracted_words = Some(words);
        }
    }
}

/// Name given to images that arrive from the clipboard rather than a file.
pub fn pasted_image_name(at: jiff::Timestamp) -> String {
    let local = at.to_zoned(jiff::tz::TimeZone::system());
    format!("粘贴图片_{}", local.strftime("%Y-%m-%d %H-%M-%S"))
}
