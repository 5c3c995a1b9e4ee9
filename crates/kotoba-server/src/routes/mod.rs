pub mod backup;
pub mod health;
pub mod images;
pub mod links;
pub mod speech;
pub mod translate;
pub mod words;

use serde::{Deserialize, Serialize};

/// Body of the `batch-delete` routes.
#[derive(Debug, Deserialize)]
pub struct BatchDeleteRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchDeleteResponse {
    pub deleted: usize,
}
