//! JSON-lines logging on stdout.
//!
//! Every line is one object with `level`, `message` and `logger`. Lines
//! written while handling a request also carry `path`, which handlers pass
//! in explicitly.

use std::fmt::Display;
use std::time::Duration;

use axum::http::Method;
use tracing::{debug, error, info, warn, Subscriber};
use tracing_subscriber::{fmt::MakeWriter, EnvFilter};

pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(writer)
        .finish()
}

/// Installs the stdout subscriber. Honours `RUST_LOG`, defaulting to `info`.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(subscriber(filter, std::io::stdout))?;
    Ok(())
}

pub fn request(logger: &str, path: &str, operation: &str, message: &str) {
    info!(logger = logger, path = path, operation = operation, "{message}");
}

pub fn listing(logger: &str, path: &str, resource: &str, count: usize) {
    info!(logger = logger, path = path, operation = "list_all", count = count, "Listed {resource}");
}

/// A miss is a warning; the response is a 404 either way. `id` is the raw path
/// segment so oversized integers are logged as requested.
pub fn lookup(logger: &str, path: &str, kind: &str, id: &str, found: bool) {
    if found {
        info!(logger = logger, path = path, operation = "get_by_id", id = id, found = true, "Fetched {kind}");
    } else {
        warn!(logger = logger, path = path, operation = "get_by_id", id = id, found = false, "{kind} not found");
    }
}

pub fn rejected_id(logger: &str, path: &str, raw: &str) {
    debug!(logger = logger, path = path, raw = raw, "Rejected non-integer id");
}

// ── HTTP trace hooks ──────────────────────────────────────────────────────────

pub fn http_started(logger: &str, method: &Method, path: &str) {
    debug!(logger = logger, method = %method, path = path, "started processing request");
}

pub fn http_finished(logger: &str, status: u16, latency: Duration) {
    debug!(
        logger = logger,
        status = status,
        latency_ms = latency.as_millis() as u64,
        "finished processing request"
    );
}

pub fn http_failed(logger: &str, failure: &dyn Display, latency: Duration) {
    error!(
        logger = logger,
        failure = %failure,
        latency_ms = latency.as_millis() as u64,
        "request failed"
    );
}


#[cfg(test)]
mod tests {
    use super::capture::Capture;
    use super::*;

    fn capture(f: impl FnOnce()) -> Vec<serde_json::Value> {
        let sink = Capture::default();
        let sub = subscriber(EnvFilter::new("debug"), sink.clone());
        tracing::subscriber::with_default(sub, f);
        sink.lines()
    }

    #[test]
    fn request_line_has_required_fields() {
        let lines = capture(|| request("order-api", "/health", "liveness", "Health check"));
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert_eq!(line["level"], "INFO");
        assert_eq!(line["message"], "Health check");
        assert_eq!(line["logger"], "order-api");
        assert_eq!(line["path"], "/health");
        assert!(line.get("target").is_none());
    }

    #[test]
    fn listing_reports_count() {
        let lines = capture(|| listing("order-api", "/orders", "orders", 4));
        assert_eq!(lines[0]["message"], "Listed orders");
        assert_eq!(lines[0]["count"], 4);
        assert_eq!(lines[0]["operation"], "list_all");
    }

    #[test]
    fn lookup_hit_is_info_with_id() {
        let lines = capture(|| lookup("product-api", "/products/3", "Product", "3", true));
        assert_eq!(lines[0]["level"], "INFO");
        assert_eq!(lines[0]["id"], "3");
        assert_eq!(lines[0]["found"], true);
    }

    #[test]
    fn lookup_miss_is_warning() {
        let lines = capture(|| lookup("order-api", "/orders/99", "Order", "99", false));
        assert_eq!(lines[0]["level"], "WARN");
        assert_eq!(lines[0]["message"], "Order not found");
        assert_eq!(lines[0]["found"], false);
    }

    #[test]
    fn startup_lines_have_no_path() {
        let lines = capture(|| info!(logger = "order-api", "Listening"));
        assert!(lines[0].get("path").is_none());
    }

    #[test]
    fn trace_hooks_carry_logger() {
        let lines = capture(|| {
            http_started("order-api", &Method::GET, "/orders/1");
            http_finished("order-api", 200, Duration::from_millis(3));
            http_failed("order-api", &"status code 500", Duration::from_millis(3));
        });
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line["logger"] == "order-api"));
        assert_eq!(lines[0]["path"], "/orders/1");
        assert_eq!(lines[1]["status"], 200);
        assert_eq!(lines[2]["level"], "ERROR");
    }

    /// A sink that refuses every write.
    #[derive(Clone, Copy)]
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed"))
        }
    }

    impl<'w> MakeWriter<'w> for Broken {
        type Writer = Broken;

        fn make_writer(&'w self) -> Self::Writer {
            *self
        }
    }

    #[tokio::test]
    async fn requests_complete_when_log_sink_fails() {
        use crate::{catalogs::OrderCatalog, routes::build_router, AppState};
        use axum::{body::Body, http::{Request, StatusCode}};
        use tower::ServiceExt;

        let _guard = tracing::subscriber::set_default(subscriber(EnvFilter::new("debug"), Broken));

        for (uri, expected) in [
            ("/orders/1", StatusCode::OK),
            ("/orders/99", StatusCode::NOT_FOUND),
            ("/orders/abc", StatusCode::NOT_FOUND),
            ("/health", StatusCode::OK),
        ] {
            let router = build_router(AppState::<OrderCatalog>::load().unwrap());
            let response = router
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), expected, "{uri}");
            let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert!(!body.is_empty(), "{uri}");
        }
    }
}
