use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use derive_more::From;

use crate::storage::StorageError;

/// API error
///
/// Every variant is logged when it is created and answered with its status code only.
/// Clients never receive an error body.
#[derive(Debug, From)]
pub enum ApiError {
    /// Internal server error
    ///
    /// This error is returned when the storage or the response serialization fails.
    InternalServerError(InternalServerError),
    /// Body error
    ///
    /// This error is returned when the body is not a valid book.
    Body(BodyError),
    /// Path error
    ///
    /// This error is returned when the path has more segments than expected.
    Path(PathError),
    /// Insert error
    ///
    /// This error is returned when the database rejects a new book.
    Insert(InsertError),
    /// Method not allowed
    ///
    /// This error is returned when the method is not allowed.
    MethodNotAllowed(MethodNotAllowedError),
    /// Not found error
    ///
    /// This error is returned when the requested resource is not found.
    NotFound(NotFoundError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(err) => err.status_code(),
            ApiError::Body(err) => err.status_code(),
            ApiError::Path(err) => err.status_code(),
            ApiError::Insert(err) => err.status_code(),
            ApiError::MethodNotAllowed(err) => err.status_code(),
            ApiError::NotFound(err) => err.status_code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.status_code().into_response()
    }
}

#[derive(Debug)]
pub struct InternalServerError;

impl InternalServerError {
    pub fn from_generic_error<E: Into<anyhow::Error>>(err: E) -> Self {
        let err: anyhow::Error = err.into();
        let err = format!("{err:#}");
        tracing::error!(%err, "Internal server error");

        InternalServerError
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[derive(Debug)]
pub struct BodyError;

impl BodyError {
    pub fn new(body_error_reason: String) -> Self {
        tracing::warn!(%body_error_reason, "Body error");

        BodyError
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

#[derive(Debug)]
pub struct PathError;

impl PathError {
    pub fn new(path_error_reason: String) -> Self {
        tracing::warn!(%path_error_reason, "Path error");

        PathError
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertErrorType {
    /// A book with the same id already exists.
    Conflict,
    /// Any other failure, including connectivity and deadline errors.
    Rejected,
}

#[derive(Debug)]
pub struct InsertError {
    insert_error_type: InsertErrorType,
}

impl InsertError {
    pub fn from_storage_error(err: StorageError) -> Self {
        let insert_error_type = match err.is_unique_violation() {
            true => InsertErrorType::Conflict,
            false => InsertErrorType::Rejected,
        };

        tracing::warn!(%err, ?insert_error_type, "Insert error");

        InsertError { insert_error_type }
    }

    fn status_code(&self) -> StatusCode {
        match self.insert_error_type {
            InsertErrorType::Conflict => StatusCode::CONFLICT,
            InsertErrorType::Rejected => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug)]
pub struct MethodNotAllowedError;

impl MethodNotAllowedError {
    pub fn new() -> Self {
        tracing::debug!("Method not allowed");

        MethodNotAllowedError
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::METHOD_NOT_ALLOWED
    }
}

#[derive(Debug)]
pub struct NotFoundError;

impl NotFoundError {
    pub fn new(reason: &str) -> Self {
        tracing::debug!(%reason, "Not found");

        NotFoundError
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    #[tokio::test]
    async fn error_responses_have_no_body() {
        let response = ApiError::from(NotFoundError::new("book")).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response
            .into_body()
            .collect()
            .await
            .expect("Body is readable")
            .to_bytes();
        assert!(body.is_empty());
    }

    #[test]
    fn storage_failure_is_internal() {
        let err = InternalServerError::from_generic_error(StorageError::DeadlineExceeded(
            std::time::Duration::from_secs(3),
        ));

        assert_eq!(
            ApiError::from(err).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn non_constraint_insert_failure_is_bad_request() {
        let err = InsertError::from_storage_error(StorageError::Query(sqlx::Error::PoolTimedOut));

        assert_eq!(
            ApiError::from(err).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
