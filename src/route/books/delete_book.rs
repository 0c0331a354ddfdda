use axum::http::StatusCode;

use crate::{
    error::{ApiError, InternalServerError},
    state::ApiState,
};

/// Deletes the book if it exists. A missing id still answers `200`.
pub async fn delete_book(state: &ApiState, id: i64) -> Result<StatusCode, ApiError> {
    state
        .book_store()
        .delete_book(id)
        .await
        .map_err(InternalServerError::from_generic_error)?;

    tracing::info!(id, "Book deleted");

    Ok(StatusCode::OK)
}
