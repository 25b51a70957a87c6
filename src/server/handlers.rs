//! Request handlers for listings.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use tracing::debug;

use crate::listing::Listing;
use crate::server::error::ApiError;
use crate::server::render;
use crate::server::AppState;
use crate::tree::path::url_path;

pub(crate) async fn health() -> &'static str {
    "ok"
}

/// `301 Moved Permanently` to the root listing
pub(crate) async fn redirect_home(State(state): State<Arc<AppState>>) -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, url_path(&state.prefixes.listing, "."))],
    )
        .into_response()
}

pub(crate) async fn listing_root(State(state): State<Arc<AppState>>) -> Response {
    listing_page(&state, "")
}

pub(crate) async fn listing(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Response {
    listing_page(&state, &path)
}

pub(crate) async fn api_listing_root(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Listing>, ApiError> {
    api_listing_for(&state, "")
}

pub(crate) async fn api_listing(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Result<Json<Listing>, ApiError> {
    api_listing_for(&state, &path)
}

fn listing_page(state: &AppState, path: &str) -> Response {
    match state.index.resolve(path) {
        Ok(node) => {
            let listing = Listing::for_node(node);
            Html(render::listing_page(&listing, &state.prefixes)).into_response()
        }
        Err(e) => {
            debug!(error = %e, "Listing not found");
            (
                StatusCode::NOT_FOUND,
                Html(render::not_found_page(path, &state.prefixes)),
            )
                .into_response()
        }
    }
}

fn api_listing_for(state: &AppState, path: &str) -> Result<Json<Listing>, ApiError> {
    let node = state.index.resolve(path)?;
    Ok(Json(Listing::for_node(node)))
}
