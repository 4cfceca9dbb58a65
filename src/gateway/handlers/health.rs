//! Liveness and readiness probes.
//!
//! Plain-text 200 responses, intentionally free of internal details.
//! Both path styles are served: `/health` + `/ready` and
//! `/health/liveness` + `/health/readiness`.

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is live", content_type = "text/plain")
    ),
    tag = "System"
)]
pub async fn liveness() -> &'static str {
    "Healthy"
}

/// Readiness probe
#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Service is ready to accept traffic", content_type = "text/plain")
    ),
    tag = "System"
)]
pub async fn readiness() -> &'static str {
    "Ready"
}
