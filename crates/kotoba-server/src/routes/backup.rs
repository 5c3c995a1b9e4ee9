use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;

use kotoba_core::export::{ExportDocument, ImportMode, ImportSummary};
use kotoba_storage::library::LibraryStats;

use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ImportQuery {
    #[serde(default)]
    pub mode: ImportMode,
}

/// The whole library as a backup document, offered as a download.
pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let doc = state.library.lock().await.export();
    let disposition = format!("attachment; filename=\"{}\"", doc.file_name());
    Ok(([(header::CONTENT_DISPOSITION, disposition)], Json(doc)))
}

/// Restore from a backup document. The raw body is parsed here so a bad
/// document is reported as a 400 with the parser's message.
pub async fn import(
    State(state): State<AppState>,
    Query(query): Query<ImportQuery>,
    body: String,
) -> Result<Json<ImportSummary>, ApiError> {
    let doc = ExportDocument::from_json(&body)?;
    let summary = state.library.lock().await.import(doc, query.mode)?;
    Ok(Json(summary))
}

pub async fn stats(State(state): State<AppState>) -> Result<Json<LibraryStats>, ApiError> {
    Ok(Json(state.library.lock().await.stats()))
}

pub async fn clear_all(State(state): State<AppState>) -> Result<Json<()>, ApiError> {
    state.library.lock().await.clear_all()?;
    Ok(Json(()))
}
