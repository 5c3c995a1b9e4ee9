//! The vocabulary library: words, images and links persisted in a
//! [`LocalStorage`] backend.
//!
//! Every mutation writes the touched collections back before the in-memory
//! copies are replaced, so a failed write leaves the library unchanged.
//! Mutations that touch several collections put back the keys they already
//! wrote when a later write fails.

use serde::Serialize;

use kotoba_core::dictionary;
use kotoba_core::export::{ExportDocument, ImportMode, ImportSummary};
use kotoba_core::models::category::WordCategory;
use kotoba_core::models::image::{ImageItem, ImagePatch, NewImage, pasted_image_name};
use kotoba_core::models::link::{LinkItem, LinkPatch, NewLink};
use kotoba_core::models::new_id;
use kotoba_core::models::word::{NewWord, Word, WordPatch, looks_like_phrase};
use kotoba_core::storage_keys;

use crate::backend::LocalStorage;
use crate::error::StorageError;
use crate::state::{load_state, save_state};

/// Anything stored in a collection and addressed by id.
pub trait Record: Clone + Serialize {
    const KIND: &'static str;

    fn id(&self) -> &str;
}

impl Record for Word {
    const KIND: &'static str = "word";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for ImageItem {
    const KIND: &'static str = "image";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for LinkItem {
    const KIND: &'static str = "link";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Home-page entry: a word typed by the user with an optional translation.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryInput {
    pub input: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub category: WordCategory,
    #[serde(default)]
    pub is_phrase: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
    pub words: usize,
    pub phrases: usize,
    pub images: usize,
    pub archived_images: usize,
    pub links: usize,
    pub processed_links: usize,
}

pub struct Library<S: LocalStorage> {
    storage: S,
    words: Vec<Word>,
    images: Vec<ImageItem>,
    links: Vec<LinkItem>,
}

impl<S: LocalStorage> Library<S> {
    /// Load all three collections from `storage`. Missing keys start empty.
    pub fn open(storage: S) -> Result<Self, StorageError> {
        let words: Vec<Word> = load_state(&storage, storage_keys::WORDS)?;
        let images: Vec<ImageItem> = load_state(&storage, storage_keys::IMAGES)?;
        let links: Vec<LinkItem> = load_state(&storage, storage_keys::LINKS)?;

        tracing::info!(
            words = words.len(),
            images = images.len(),
            links = links.len(),
            "library loaded"
        );

        Ok(Self {
            storage,
            words,
            images,
            links,
        })
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn images(&self) -> &[ImageItem] {
        &self.images
    }

    pub fn links(&self) -> &[LinkItem] {
        &self.links
    }

    // ---- words ----

    pub fn add_word(&mut self, input: NewWord) -> Result<Word, StorageError> {
        let word = input.into_word(new_id(), jiff::Timestamp::now())?;
        let mut words = self.words.clone();
        words.push(word.clone());
        self.commit_words(words)?;
        Ok(word)
    }

    /// Add a word from the entry form. A blank translation is filled in
    /// from the dictionary, or with the pending placeholder.
    pub fn add_entry(&mut self, entry: EntryInput) -> Result<Word, StorageError> {
        let japanese = entry.input.trim();
        if japanese.is_empty() {
            return Err(StorageError::EmptyInput);
        }

        let translation = entry.translation.trim();
        let chinese = if translation.is_empty() {
            dictionary::auto_translation(japanese)
        } else {
            translation.to_string()
        };

        self.add_word(NewWord {
            japanese: japanese.to_string(),
            chinese,
            category: entry.category,
            rating: 0,
            is_phrase: entry.is_phrase,
        })
    }

    pub fn update_word(&mut self, id: &str, patch: WordPatch) -> Result<Word, StorageError> {
        let mut words = self.words.clone();
        let word = find_mut(&mut words, id)?;
        patch.apply(word)?;
        let updated = word.clone();
        self.commit_words(words)?;
        Ok(updated)
    }

    pub fn delete_word(&mut self, id: &str) -> Result<(), StorageError> {
        let words = remove_one(&self.words, id)?;
        self.commit_words(words)
    }

    /// Delete every listed word. Unknown ids are skipped.
    pub fn delete_words(&mut self, ids: &[String]) -> Result<usize, StorageError> {
        let (words, removed) = remove_many(&self.words, ids);
        self.commit_words(words)?;
        Ok(removed)
    }

    // ---- images ----

    /// Add an image. A blank name gets the pasted-image name for now.
    pub fn add_image(&mut self, mut input: NewImage) -> Result<ImageItem, StorageError> {
        let now = jiff::Timestamp::now();
        if input.name.trim().is_empty() {
            input.name = pasted_image_name(now);
        }
        let image = input.into_image(new_id(), now);
        let mut images = self.images.clone();
        images.push(image.clone());
        self.commit_images(images)?;
        Ok(image)
    }

    pub fn update_image(&mut self, id: &str, patch: ImagePatch) -> Result<ImageItem, StorageError> {
        let mut images = self.images.clone();
        let image = find_mut(&mut images, id)?;
        patch.apply(image);
        let updated = image.clone();
        self.commit_images(images)?;
        Ok(updated)
    }

    pub fn toggle_image_archived(&mut self, id: &str) -> Result<ImageItem, StorageError> {
        let current = find(&self.images, id)?.is_archived;
        self.update_image(
            id,
            ImagePatch {
                is_archived: Some(!current),
                ..Default::default()
            },
        )
    }

    pub fn delete_image(&mut self, id: &str) -> Result<(), StorageError> {
        let images = remove_one(&self.images, id)?;
        self.commit_images(images)
    }

    pub fn delete_images(&mut self, ids: &[String]) -> Result<usize, StorageError> {
        let (images, removed) = remove_many(&self.images, ids);
        self.commit_images(images)?;
        Ok(removed)
    }

    /// Turn the lines of `text` into words and record them on the image.
    ///
    /// Blank lines are dropped. Each word is filed under `other`, unrated,
    /// auto-translated from the dictionary, and marked as a phrase when it
    /// is long. When nothing remains after trimming the image is untouched.
    pub fn extract_words(&mut self, image_id: &str, text: &str) -> Result<Vec<Word>, StorageError> {
        find(&self.images, image_id)?;

        let lines: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        if lines.is_empty() {
            return Ok(Vec::new());
        }

        let now = jiff::Timestamp::now();
        let mut added = Vec::with_capacity(lines.len());
        for line in &lines {
            let word = NewWord {
                japanese: line.clone(),
                chinese: dictionary::auto_translation(line),
                category: WordCategory::Other,
                rating: 0,
                is_phrase: looks_like_phrase(line),
            }
            .into_word(new_id(), now)?;
            added.push(word);
        }

        let mut words = self.words.clone();
        words.extend(added.iter().cloned());

        let mut images = self.images.clone();
        ImagePatch {
            extracted_words: Some(lines),
            ..Default::default()
        }
        .apply(find_mut(&mut images, image_id)?);

        self.commit(Staged {
            words: Some(words),
            images: Some(images),
            links: None,
        })?;

        tracing::info!(image_id, count = added.len(), "words extracted from image");
        Ok(added)
    }

    // ---- links ----

    /// Add a link. The URL and title are trimmed and an empty title
    /// becomes the URL's host name.
    pub fn add_link(&mut self, input: NewLink) -> Result<LinkItem, StorageError> {
        let input = input.normalized();
        if input.url.is_empty() {
            return Err(StorageError::EmptyInput);
        }
        let link = input.into_link(new_id(), jiff::Timestamp::now());
        let mut links = self.links.clone();
        links.push(link.clone());
        self.commit_links(links)?;
        Ok(link)
    }

    pub fn update_link(&mut self, id: &str, patch: LinkPatch) -> Result<LinkItem, StorageError> {
        let mut links = self.links.clone();
        let link = find_mut(&mut links, id)?;
        patch.apply(link);
        let updated = link.clone();
        self.commit_links(links)?;
        Ok(updated)
    }

    pub fn toggle_link_processed(&mut self, id: &str) -> Result<LinkItem, StorageError> {
        let current = find(&self.links, id)?.is_processed;
        self.update_link(
            id,
            LinkPatch {
                is_processed: Some(!current),
                ..Default::default()
            },
        )
    }

    pub fn delete_link(&mut self, id: &str) -> Result<(), StorageError> {
        let links = remove_one(&self.links, id)?;
        self.commit_links(links)
    }

    pub fn delete_links(&mut self, ids: &[String]) -> Result<usize, StorageError> {
        let (links, removed) = remove_many(&self.links, ids);
        self.commit_links(links)?;
        Ok(removed)
    }

    // ---- whole library ----

    pub fn stats(&self) -> LibraryStats {
        LibraryStats {
            words: self.words.len(),
            phrases: self.words.iter().filter(|w| w.is_phrase).count(),
            images: self.images.len(),
            archived_images: self.images.iter().filter(|i| i.is_archived).count(),
            links: self.links.len(),
            processed_links: self.links.iter().filter(|l| l.is_processed).count(),
        }
    }

    pub fn export(&self) -> ExportDocument {
        ExportDocument::new(
            self.words.clone(),
            self.images.clone(),
            self.links.clone(),
            jiff::Timestamp::now(),
        )
    }

    pub fn import(
        &mut self,
        doc: ExportDocument,
        mode: ImportMode,
    ) -> Result<ImportSummary, StorageError> {
        kotoba_core::export::check_version(&doc.version)?;

        let summary = ImportSummary {
            words: doc.words.len(),
            images: doc.images.len(),
            links: doc.links.len(),
        };

        let (words, images, links) = match mode {
            ImportMode::Replace => (doc.words, doc.images, doc.links),
            ImportMode::Merge => (
                merge(&self.words, doc.words),
                merge(&self.images, doc.images),
                merge(&self.links, doc.links),
            ),
        };

        self.commit(Staged {
            words: Some(words),
            images: Some(images),
            links: Some(links),
        })?;

        tracing::info!(
            ?mode,
            words = summary.words,
            images = summary.images,
            links = summary.links,
            "backup imported"
        );
        Ok(summary)
    }

    /// Delete every stored key and empty the collections.
    pub fn clear_all(&mut self) -> Result<(), StorageError> {
        self.storage.clear()?;
        self.words.clear();
        self.images.clear();
        self.links.clear();
        tracing::warn!("all library data cleared");
        Ok(())
    }

    /// Write every staged collection, then swap them in. When a write fails
    /// the keys already written are restored from the in-memory copies.
    fn commit(&mut self, staged: Staged) -> Result<(), StorageError> {
        let mut written: Vec<&'static str> = Vec::with_capacity(3);
        if let Err(e) = write_staged(&mut self.storage, &staged, &mut written) {
            for key in written {
                if let Err(restore_err) = self.restore(key) {
                    tracing::error!(key, error = %restore_err, "failed to restore storage key");
                }
            }
            return Err(e);
        }

        if let Some(words) = staged.words {
            self.words = words;
        }
        if let Some(images) = staged.images {
            self.images = images;
        }
        if let Some(links) = staged.links {
            self.links = links;
        }
        Ok(())
    }

    fn restore(&mut self, key: &str) -> Result<(), StorageError> {
        match key {
            storage_keys::WORDS => save_state(&mut self.storage, key, &self.words),
            storage_keys::IMAGES => save_state(&mut self.storage, key, &self.images),
            storage_keys::LINKS => save_state(&mut self.storage, key, &self.links),
            _ => Ok(()),
        }
    }

    fn commit_words(&mut self, words: Vec<Word>) -> Result<(), StorageError> {
        save_state(&mut self.storage, storage_keys::WORDS, &words)?;
        self.words = words;
        Ok(())
    }

    fn commit_images(&mut self, images: Vec<ImageItem>) -> Result<(), StorageError> {
        save_state(&mut self.storage, storage_keys::IMAGES, &images)?;
        self.images = images;
        Ok(())
    }

    fn commit_links(&mut self, links: Vec<LinkItem>) -> Result<(), StorageError> {
        save_state(&mut self.storage, storage_keys::LINKS, &links)?;
        self.links = links;
        Ok(())
    }
}

/// New contents for the collections a mutation touches.
struct Staged {
    words: Option<Vec<Word>>,
    images: Option<Vec<ImageItem>>,
    links: Option<Vec<LinkItem>>,
}

fn write_staged<S: LocalStorage>(
    storage: &mut S,
    staged: &Staged,
    written: &mut Vec<&'static str>,
) -> Result<(), StorageError> {
    if let Some(words) = &staged.words {
        save_state(storage, storage_keys::WORDS, words)?;
        written.push(storage_keys::WORDS);
    }
    if let Some(images) = &staged.images {
        save_state(storage, storage_keys::IMAGES, images)?;
        written.push(storage_keys::IMAGES);
    }
    if let Some(links) = &staged.links {
        save_state(storage, storage_keys::LINKS, links)?;
        written.push(storage_keys::LINKS);
    }
    Ok(())
}

fn not_found<R: Record>(id: &str) -> StorageError {
    StorageError::NotFound {
        kind: R::KIND,
        id: id.to_string(),
    }
}

fn find<'a, R: Record>(items: &'a [R], id: &str) -> Result<&'a R, StorageError> {
    items
        .iter()
        .find(|r| r.id() == id)
        .ok_or_else(|| not_found::<R>(id))
}

fn find_mut<'a, R: Record>(items: &'a mut [R], id: &str) -> Result<&'a mut R, StorageError> {
    items
        .iter_mut()
        .find(|r| r.id() == id)
        .ok_or_else(|| not_found::<R>(id))
}

fn remove_one<R: Record>(items: &[R], id: &str) -> Result<Vec<R>, StorageError> {
    find(items, id)?;
    Ok(items.iter().filter(|r| r.id() != id).cloned().collect())
}

fn remove_many<R: Record>(items: &[R], ids: &[String]) -> (Vec<R>, usize) {
    let kept: Vec<R> = items
        .iter()
        .filter(|r| !ids.iter().any(|id| id == r.id()))
        .cloned()
        .collect();
    let removed = items.len() - kept.len();
    (kept, removed)
}

/// Upsert `incoming` into `current` by id. Existing records keep their
/// position; new ids are appended in document order.
fn merge<R: Record>(current: &[R], incoming: Vec<R>) -> Vec<R> {
    let mut out = current.to_vec();
    for record in incoming {
        match out.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => *existing = record,
            None => out.push(record),
        }
    }
    out
}
