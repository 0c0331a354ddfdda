use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::{ApiError, MethodNotAllowedError};

/// Middleware to map axum's `MethodNotAllowed` rejection to our [`ApiError`].
///
/// The `Allow` header of the rejected response is kept.
pub async fn method_not_allowed(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let resp = next.run(req).await;

    if resp.status() != StatusCode::METHOD_NOT_ALLOWED {
        return resp;
    }

    tracing::debug!(%method, %path, "Rejected method");

    let allow = resp.headers().get(header::ALLOW).cloned();
    let mut resp = ApiError::from(MethodNotAllowedError::new()).into_response();

    if let Some(allow) = allow {
        resp.headers_mut().insert(header::ALLOW, allow);
    }

    resp
}
