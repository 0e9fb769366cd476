//! Request-level middleware: logging and rate limiting.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use tracing::info;

/// Shared rate limiter type.
pub type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Build an unkeyed limiter with the given per-minute quota.
///
/// A zero quota falls back to 60 RPM rather than disabling the gateway.
#[must_use]
pub fn build_rate_limiter(requests_per_minute: u32) -> SharedRateLimiter {
    let quota = NonZeroU32::new(requests_per_minute)
        .or_else(|| NonZeroU32::new(60))
        .map(Quota::per_minute)
        .unwrap_or_else(|| Quota::per_minute(NonZeroU32::MIN));
    Arc::new(RateLimiter::direct(quota))
}

/// Reject requests above the configured quota with 429.
pub async fn rate_limit(
    limiter: SharedRateLimiter,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    match limiter.check() {
        Ok(()) => Ok(next.run(request).await),
        Err(_) => Err(StatusCode::TOO_MANY_REQUESTS),
    }
}

/// Log method, path, status and latency of every request.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis(),
        "Request completed"
    );

    response
}
