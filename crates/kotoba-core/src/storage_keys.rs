//! Local storage key conventions.
//!
//! Each collection lives under its own key as a JSON array. These names
//! are shared with existing browser backups and must not change.

pub const WORDS: &str = "words";

pub const IMAGES: &str = "images";

pub const LINKS: &str = "links";

/// Every key the library owns, in the order collections are loaded.
pub const ALL: [&str; 3] = [WORDS, IMAGES, LINKS];
