use axum::http::Uri;

use crate::error::{ApiError, NotFoundError};

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(NotFoundError::new(uri.path()))
}
