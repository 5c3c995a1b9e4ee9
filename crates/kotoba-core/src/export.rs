//! Backup document written by "export" and read back by "import".

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::image::ImageItem;
use crate::models::link::LinkItem;
use crate::models::word::Word;

pub const EXPORT_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ExportDocument {
    #[serde(default)]
    pub words: Vec<Word>,
    #[serde(default)]
    pub images: Vec<ImageItem>,
    #[serde(default)]
    pub links: Vec<LinkItem>,
    pub export_date: jiff::Timestamp,
    pub version: String,
}

impl ExportDocument {
    pub fn new(
        words: Vec<Word>,
        images: Vec<ImageItem>,
        links: Vec<LinkItem>,
        export_date: jiff::Timestamp,
    ) -> Self {
        Self {
            words,
            images,
            links,
            export_date,
            version: EXPORT_VERSION.to_string(),
        }
    }

    /// Parse a backup and reject versions this build does not understand.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let doc: ExportDocument = serde_json::from_str(json)?;
        check_version(&doc.version)?;
        Ok(doc)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `japanese-vocabulary-backup-YYYY-MM-DD.json`, dated in UTC.
    pub fn file_name(&self) -> String {
        format!(
            "japanese-vocabulary-backup-{}.json",
            self.export_date.strftime("%Y-%m-%d")
        )
    }
}

/// Any `1.x` backup is readable.
pub fn check_version(version: &str) -> Result<(), CoreError> {
    let major = version.split('.').next().unwrap_or_default();
    if major == "1" {
        Ok(())
    } else {
        Err(CoreError::UnsupportedVersion(version.to_string()))
    }
}

/// How an imported document is combined with the current data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ImportMode {
    /// Discard current collections and take the document's.
    #[default]
    Replace,
    /// Upsert by id; incoming records win, unknown ids are appended.
    Merge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImportSummary {
    pub words: usize,
    pub images: usize,
    pub links: usize,
}
