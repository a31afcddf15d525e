use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{classify::ServerErrorsFailureClass, cors::CorsLayer, trace::TraceLayer};
use tracing::Span;

use crate::{catalog::CatalogSpec, handlers, logging, AppState};

pub fn build_router<C: CatalogSpec>(state: AppState<C>) -> Router {
    let collection = format!("/{}", C::RESOURCE);
    let member = format!("/{}/:id", C::RESOURCE);

    Router::new()
        // ── Service metadata ────────────────────────────────────────────────
        .route("/", get(handlers::index::<C>))

        // ── Probes ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health::<C>))
        .route("/ready", get(handlers::ready::<C>))

        // ── Records (read-only) ─────────────────────────────────────────────
        .route(&collection, get(handlers::records::list_records::<C>))
        .route(&member, get(handlers::records::get_record::<C>))

        .fallback(handlers::not_found)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .on_request(|request: &Request<Body>, _span: &Span| {
                            logging::http_started(C::SERVICE_NAME, request.method(), request.uri().path())
                        })
                        .on_response(|response: &Response<Body>, latency: Duration, _span: &Span| {
                            logging::http_finished(C::SERVICE_NAME, response.status().as_u16(), latency)
                        })
                        .on_eos(())
                        .on_failure(
                            |failure: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                                logging::http_failed(C::SERVICE_NAME, &failure, latency)
                            },
                        ),
                )
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
