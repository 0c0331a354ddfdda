use axum::http::{header, HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

const CORS_HEADERS: [(HeaderName, &str); 4] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::CONTENT_TYPE, "application/json"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, GET, OPTIONS, DELETE"),
    (
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        "Accept, Content-Type, Content-Length, Accept-Encoding, Origin, X-Requested-With",
    ),
];

/// Layers that write permissive CORS headers on every response.
///
/// Unlike a CORS layer these never answer preflight requests, `OPTIONS` always reaches the router.
pub fn cors_headers() -> impl Iterator<Item = SetResponseHeaderLayer<HeaderValue>> {
    CORS_HEADERS.into_iter().map(|(name, value)| {
        SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
    })
}
