use axum::extract::{Path, State};
use serde::Deserialize;

use kotoba_core::models::link::{LinkItem, LinkPatch, NewLink};
use kotoba_core::query::{
    LinkFilter, ProcessedFilter, SortOrder, filter_links, parse_category_filter,
};

use super::{BatchDeleteRequest, BatchDeleteResponse};
use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LinkQuery {
    #[serde(default)]
    pub processed: ProcessedFilter,
    /// `all` or a category name.
    pub category: Option<String>,
    #[serde(default)]
    pub order: SortOrder,
}

pub async fn list_links(
    State(state): State<AppState>,
    Query(query): Query<LinkQuery>,
) -> Result<Json<Vec<LinkItem>>, ApiError> {
    let filter = LinkFilter {
        processed: query.processed,
        category: match &query.category {
            Some(raw) => parse_category_filter(raw)?,
            None => None,
        },
    };
    let library = state.library.lock().await;
    Ok(Json(filter_links(library.links(), filter, query.order)))
}

pub async fn create_link(
    State(state): State<AppState>,
    Json(input): Json<NewLink>,
) -> Result<Json<LinkItem>, ApiError> {
    let link = state.library.lock().await.add_link(input)?;
    Ok(Json(link))
}

pub async fn update_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<LinkPatch>,
) -> Result<Json<LinkItem>, ApiError> {
    let link = state.library.lock().await.update_link(&id, patch)?;
    Ok(Json(link))
}

pub async fn toggle_processed(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LinkItem>, ApiError> {
    let link = state.library.lock().await.toggle_link_processed(&id)?;
    Ok(Json(link))
}

pub async fn delete_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<()>, ApiError> {
    state.library.lock().await.delete_link(&id)?;
    Ok(Json(()))
}

pub async fn batch_delete_links(
    State(state): State<AppState>,
    Json(req): Json<BatchDeleteRequest>,
) -> Result<Json<BatchDeleteResponse>, ApiError> {
    let deleted = state.library.lock().await.delete_links(&req.ids)?;
    Ok(Json(BatchDeleteResponse { deleted }))
}
