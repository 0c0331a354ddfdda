use axum::{extract::State, http::StatusCode};

use crate::{
    error::{ApiError, InsertError},
    extractor::json::ApiJson,
    state::ApiState,
    types::book::Book,
};

/// Inserts the book and answers `201` with an empty body.
pub async fn create_book(
    State(state): State<ApiState>,
    ApiJson(book): ApiJson<Book>,
) -> Result<StatusCode, ApiError> {
    let row_id = state
        .book_store()
        .insert_book(&book)
        .await
        .map_err(InsertError::from_storage_error)?;

    tracing::info!(id = book.id, row_id, "Book created");

    Ok(StatusCode::CREATED)
}
