use axum::extract::{Path, State};
use serde::Deserialize;

use kotoba_core::models::image::{ImageItem, ImagePatch, NewImage};
use kotoba_core::models::word::Word;
use kotoba_core::query::{ArchiveFilter, SortOrder, filter_images};

use super::{BatchDeleteRequest, BatchDeleteResponse};
use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ImageQuery {
    #[serde(default)]
    pub archived: ArchiveFilter,
    #[serde(default)]
    pub order: SortOrder,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    /// One word or phrase per line.
    pub text: String,
}

pub async fn list_images(
    State(state): State<AppState>,
    Query(query): Query<ImageQuery>,
) -> Result<Json<Vec<ImageItem>>, ApiError> {
    let library = state.library.lock().await;
    Ok(Json(filter_images(library.images(), query.archived, query.order)))
}

pub async fn create_image(
    State(state): State<AppState>,
    Json(input): Json<NewImage>,
) -> Result<Json<ImageItem>, ApiError> {
    let image = state.library.lock().await.add_image(input)?;
    Ok(Json(image))
}

pub async fn update_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ImagePatch>,
) -> Result<Json<ImageItem>, ApiError> {
    let image = state.library.lock().await.update_image(&id, patch)?;
    Ok(Json(image))
}

pub async fn toggle_archived(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ImageItem>, ApiError> {
    let image = state.library.lock().await.toggle_image_archived(&id)?;
    Ok(Json(image))
}

pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<()>, ApiError> {
    state.library.lock().await.delete_image(&id)?;
    Ok(Json(()))
}

pub async fn batch_delete_images(
    State(state): State<AppState>,
    Json(req): Json<BatchDeleteRequest>,
) -> Result<Json<BatchDeleteResponse>, ApiError> {
    let deleted = state.library.lock().await.delete_images(&req.ids)?;
    Ok(Json(BatchDeleteResponse { deleted }))
}

/// Add the typed lines as words and remember them on the image.
pub async fn extract_words(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<Vec<Word>>, ApiError> {
    let words = state.library.lock().await.extract_words(&id, &req.text)?;
    Ok(Json(words))
}
