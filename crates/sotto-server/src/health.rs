use http::StatusCode;

/// Liveness probe
pub(crate) async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
