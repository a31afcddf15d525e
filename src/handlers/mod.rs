pub mod extract;
pub mod records;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    Json,
};
use serde_json::json;

use crate::{
    catalog::{CatalogSpec, Probe, ServiceInfo},
    logging, AppState,
};

// ── GET / ─────────────────────────────────────────────────────────────────────

pub async fn index<C: CatalogSpec>(
    State(state): State<AppState<C>>,
    uri: Uri,
) -> (StatusCode, Json<ServiceInfo>) {
    logging::request(C::SERVICE_NAME, uri.path(), "service_info", "Service info requested");
    (StatusCode::OK, Json(state.catalog.service_info()))
}

// ── Probes ────────────────────────────────────────────────────────────────────

pub async fn health<C: CatalogSpec>(
    State(state): State<AppState<C>>,
    uri: Uri,
) -> (StatusCode, Json<Probe>) {
    logging::request(C::SERVICE_NAME, uri.path(), "liveness", "Health check");
    (StatusCode::OK, Json(state.catalog.liveness()))
}

pub async fn ready<C: CatalogSpec>(
    State(state): State<AppState<C>>,
    uri: Uri,
) -> (StatusCode, Json<Probe>) {
    logging::request(C::SERVICE_NAME, uri.path(), "readiness", "Readiness check");
    (StatusCode::OK, Json(state.catalog.readiness()))
}

// ── Fallback ──────────────────────────────────────────────────────────────────

pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
