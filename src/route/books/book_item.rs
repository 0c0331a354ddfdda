use axum::{
    extract::State,
    http::{header, HeaderValue, Method},
    response::{IntoResponse, Response},
};

use crate::{
    error::{ApiError, MethodNotAllowedError},
    extractor::path::BookIdPath,
    state::ApiState,
};

const ALLOWED_METHODS: &str = "GET,DELETE";

/// Dispatches `/books/{id}` by method once the id is known.
pub async fn book_item(
    State(state): State<ApiState>,
    BookIdPath(id): BookIdPath,
    method: Method,
) -> Result<Response, ApiError> {
    match method {
        Method::GET => super::get_book::get_book(&state, id)
            .await
            .map(IntoResponse::into_response),
        Method::DELETE => super::delete_book::delete_book(&state, id)
            .await
            .map(IntoResponse::into_response),
        _ => Ok((
            [(header::ALLOW, HeaderValue::from_static(ALLOWED_METHODS))],
            ApiError::from(MethodNotAllowedError::new()),
        )
            .into_response()),
    }
}
