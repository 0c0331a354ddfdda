use crate::{
    error::{ApiError, InternalServerError, NotFoundError},
    extractor::json::ApiJson,
    state::ApiState,
    types::book::Book,
};

pub async fn get_book(state: &ApiState, id: i64) -> Result<ApiJson<Book>, ApiError> {
    let book = state
        .book_store()
        .get_book(id)
        .await
        .map_err(InternalServerError::from_generic_error)?;

    match book {
        Some(book) => Ok(ApiJson(book)),
        None => Err(NotFoundError::new(&format!("Book with id {id} not found")).into()),
    }
}
