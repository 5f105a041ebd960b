//! Request ID generation and request span construction

use axum::http::Request;
use tracing::Span;
use uuid::Uuid;

/// Generate a new request ID using UUID v4
///
/// ```
/// use command_center::logging::generate_request_id;
///
/// let request_id = generate_request_id();
/// assert_eq!(request_id.len(), 36);
/// ```
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span factory for `TraceLayer::make_span_with`.
///
/// Every HTTP request gets its own `request_id` so log lines emitted while
/// handling it can be correlated.
pub fn make_request_span<B>(request: &Request<B>) -> Span {
    tracing::info_span!(
        "request",
        request_id = %generate_request_id(),
        method = %request.method(),
        path = %request.uri().path(),
    )
}
