use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

use crate::error::{ApiError, BodyError, InternalServerError};

/// A JSON body that rejects and fails with an [`ApiError`].
///
/// As an extractor it consumes the request body and decodes its first JSON value regardless of the `Content-Type` header.
/// As a response it is written with [`StatusCode::OK`], a serialization failure becomes a `500`.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Debug + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "json_extractor", skip_all)]
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!(rejection=?rejection, "Rejection");

            BodyError::new(rejection.body_text())
        })?;

        // Only the first value counts, anything after it is ignored.
        match serde_json::Deserializer::from_slice(&bytes)
            .into_iter::<T>()
            .next()
        {
            Some(Ok(json)) => {
                tracing::trace!(json=?json, "Extracted");

                Ok(ApiJson(json))
            }
            Some(Err(err)) => Err(BodyError::new(err.to_string()).into()),
            None => Err(BodyError::new("Body is empty".to_string()).into()),
        }
    }
}

impl<T> IntoResponse for ApiJson<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => (
                StatusCode::OK,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                body,
            )
                .into_response(),
            Err(err) => ApiError::from(InternalServerError::from_generic_error(err)).into_response(),
        }
    }
}
