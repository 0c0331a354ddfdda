use axum::{extract::Request, middleware::Next, response::Response};

/// Middleware to trace request and response headers.
pub async fn trace_headers(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    tracing::trace!(%method, %path, incoming_headers = ?req.headers(), "Headers");

    let response = next.run(req).await;

    tracing::trace!(
        status = %response.status(),
        outgoing_headers = ?response.headers(),
        "Headers"
    );

    response
}
