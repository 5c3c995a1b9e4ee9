//! kotoba-server
//!
//! Local HTTP API over the vocabulary library, the translation chain and
//! pronunciation playback. The binary in `main.rs` wires it to the
//! filesystem and the hosted proxy functions; tests drive [`app`] directly.

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, post, put};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the router with every route, access logging and CORS.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Words
        .route("/words", get(routes::words::list_words))
        .route("/words", post(routes::words::create_word))
        .route("/words/entry", post(routes::words::create_entry))
        .route("/words/batch-delete", post(routes::words::batch_delete_words))
        .route("/words/{id}", put(routes::words::update_word))
        .route("/words/{id}", delete(routes::words::delete_word))
        // Images
        .route("/images", get(routes::images::list_images))
        .route("/images", post(routes::images::create_image))
        .route("/images/batch-delete", post(routes::images::batch_delete_images))
        .route("/images/{id}", put(routes::images::update_image))
        .route("/images/{id}", delete(routes::images::delete_image))
        .route("/images/{id}/archive", post(routes::images::toggle_archived))
        .route("/images/{id}/extract", post(routes::images::extract_words))
        // Links
        .route("/links", get(routes::links::list_links))
        .route("/links", post(routes::links::create_link))
        .route("/links/batch-delete", post(routes::links::batch_delete_links))
        .route("/links/{id}", put(routes::links::update_link))
        .route("/links/{id}", delete(routes::links::delete_link))
        .route("/links/{id}/processed", post(routes::links::toggle_processed))
        // Whole library
        .route("/export", get(routes::backup::export))
        .route("/import", post(routes::backup::import))
        .route("/stats", get(routes::backup::stats))
        .route("/clear", post(routes::backup::clear_all))
        // Helpers
        .route("/translate", post(routes::translate::translate))
        .route("/speech", post(routes::speech::speak))
        .route("/speech/voices", get(routes::speech::voice_options))
        .route("/speech/preload", post(routes::speech::preload))
        .route("/speech/cache", delete(routes::speech::clear_cache))
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(axum_mw::from_fn(middleware::access::access_log)),
        )
        .with_state(state)
}
