use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use super::extract::RecordId;
use crate::{
    catalog::{CatalogService, CatalogSpec},
    error::AppResult,
    logging, AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_records<C: CatalogSpec>(
    State(state): State<AppState<C>>,
    uri: Uri,
) -> Response {
    let listing = state.catalog.list_all();
    logging::listing(C::SERVICE_NAME, uri.path(), C::RESOURCE, listing.len());
    (StatusCode::OK, Json(listing)).into_response()
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_record<C: CatalogSpec>(
    State(state): State<AppState<C>>,
    uri: Uri,
    id: RecordId,
) -> AppResult<Response> {
    let result = match id.value {
        Some(value) => state.catalog.get_by_id(value),
        None => Err(CatalogService::<C>::not_found()),
    };
    logging::lookup(C::SERVICE_NAME, uri.path(), C::KIND, &id.raw, result.is_ok());
    let record = result?;
    Ok((StatusCode::OK, Json(record)).into_response())
}
