use axum::extract::{Path, State};
use serde::Deserialize;

use kotoba_core::models::word::{NewWord, Word, WordPatch};
use kotoba_core::query::{
    SortBy, SortOrder, WordFilter, WordKind, WordSort, filter_words, parse_category_filter,
};
use kotoba_storage::library::EntryInput;

use super::{BatchDeleteRequest, BatchDeleteResponse};
use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub kind: WordKind,
    /// Comma-separated, e.g. `4,5`.
    pub ratings: Option<String>,
    /// `all` or a category name.
    pub category: Option<String>,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub order: SortOrder,
}

impl WordQuery {
    fn filter(&self) -> Result<WordFilter, ApiError> {
        let ratings = match &self.ratings {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(|r| {
                    r.parse::<u8>()
                        .map_err(|_| ApiError::BadRequest(format!("invalid rating: {r}")))
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(WordFilter {
            search: self.search.clone(),
            kind: self.kind,
            ratings,
            category: match &self.category {
                Some(raw) => parse_category_filter(raw)?,
                None => None,
            },
        })
    }
}

pub async fn list_words(
    State(state): State<AppState>,
    Query(query): Query<WordQuery>,
) -> Result<Json<Vec<Word>>, ApiError> {
    let filter = query.filter()?;
    let sort = WordSort {
        by: query.sort_by,
        order: query.order,
    };

    let library = state.library.lock().await;
    Ok(Json(filter_words(library.words(), &filter, sort)))
}

pub async fn create_word(
    State(state): State<AppState>,
    Json(input): Json<NewWord>,
) -> Result<Json<Word>, ApiError> {
    let word = state.library.lock().await.add_word(input)?;
    Ok(Json(word))
}

/// Quick entry: a blank translation is filled from the dictionary.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(entry): Json<EntryInput>,
) -> Result<Json<Word>, ApiError> {
    let word = state.library.lock().await.add_entry(entry)?;
    Ok(Json(word))
}

pub async fn update_word(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<WordPatch>,
) -> Result<Json<Word>, ApiError> {
    let word = state.library.lock().await.update_word(&id, patch)?;
    Ok(Json(word))
}

pub async fn delete_word(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<()>, ApiError> {
    state.library.lock().await.delete_word(&id)?;
    Ok(Json(()))
}

pub async fn batch_delete_words(
    State(state): State<AppState>,
    Json(req): Json<BatchDeleteRequest>,
) -> Result<Json<BatchDeleteResponse>, ApiError> {
    let deleted = state.library.lock().await.delete_words(&req.ids)?;
    Ok(Json(BatchDeleteResponse { deleted }))
}
