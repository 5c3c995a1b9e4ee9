use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Topic a word or link is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WordCategory {
    Clothing,
    Food,
    Housing,
    Transport,
    Shopping,
    People,
    Conversation,
    #[default]
    Other,
}

impl WordCategory {
    pub const ALL: [WordCategory; 8] = [
        WordCategory::Clothing,
        WordCategory::Food,
        WordCategory::Housing,
        WordCategory::Transport,
        WordCategory::Shopping,
        WordCategory::People,
        WordCategory::Conversation,
        WordCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WordCategory::Clothing => "clothing",
            WordCategory::Food => "food",
            WordCategory::Housing => "housing",
            WordCategory::Transport => "transport",
            WordCategory::Shopping => "shopping",
            WordCategory::People => "people",
            WordCategory::Conversation => "conversation",
            WordCategory::Other => "other",
        }
    }

    /// Label shown in the category pickers.
    pub fn label(self) -> &'static str {
        match self {
            WordCategory::Clothing => "衣",
            WordCategory::Food => "食",
            WordCategory::Housing => "住",
            WordCategory::Transport => "行",
            WordCategory::Shopping => "购物",
            WordCategory::People => "人物",
            WordCategory::Conversation => "对话",
            WordCategory::Other => "其他",
        }
    }
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WordCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}
