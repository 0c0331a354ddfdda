use axum::{
    http::StatusCode,
    routing::{any, get},
    Router,
};

use crate::{
    error::{ApiError, MethodNotAllowedError},
    state::ApiState,
};

/// Collection and item endpoints, relative to the `/api` base path.
pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new()
        .route(
            "/books",
            get(super::list_books::list_books)
                .head(head_not_allowed)
                .post(super::create_book::create_book)
                .options(preflight),
        )
        // The id is parsed before the method is looked at.
        .route("/books/*id", any(super::book_item::book_item))
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// `get` would answer `HEAD` implicitly.
async fn head_not_allowed() -> ApiError {
    MethodNotAllowedError::new().into()
}
