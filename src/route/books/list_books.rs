use axum::extract::State;

use crate::{
    error::{ApiError, InternalServerError},
    extractor::json::ApiJson,
    state::ApiState,
    types::book::Book,
};

pub async fn list_books(State(state): State<ApiState>) -> Result<ApiJson<Vec<Book>>, ApiError> {
    let books = state
        .book_store()
        .list_books()
        .await
        .map_err(InternalServerError::from_generic_error)?;

    Ok(ApiJson(books))
}
