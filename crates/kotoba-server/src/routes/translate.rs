use axum::extract::State;
use serde::Deserialize;

use kotoba_translate::{Direction, TranslationResult, smart_translate};

use crate::error::ApiError;
use crate::extract::Json;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default)]
    pub direction: Direction,
}

/// Dictionary first, then the translation proxy. Remote failures come back
/// as a placeholder translation, not an error.
pub async fn translate(
    State(state): State<AppState>,
    Json(req): Json<TranslateRequest>,
) -> Result<Json<TranslationResult>, ApiError> {
    let result = smart_translate(state.translator.as_deref(), &req.text, req.direction).await?;
    Ok(Json(result))
}
