use axum::{
    async_trait,
    extract::{FromRequestParts, Path as AxumPath},
    http::request::Parts,
};

use crate::error::{ApiError, NotFoundError, PathError};

/// The result of matching the path tail after `/books/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookIdSegment {
    /// A single integer segment.
    Id(i64),
    /// More than one segment, e.g. `1/2`.
    Nested,
    /// A single segment that is not an integer, e.g. `abc`.
    NotNumeric,
}

impl BookIdSegment {
    pub fn parse(tail: &str) -> Self {
        let tail = tail.strip_prefix('/').unwrap_or(tail);

        if tail.contains('/') {
            return BookIdSegment::Nested;
        }

        match tail.parse::<i64>() {
            Ok(id) => BookIdSegment::Id(id),
            Err(_) => BookIdSegment::NotNumeric,
        }
    }
}

/// Extracts the book id from the catch-all path parameter.
///
/// Rejects nested paths with a [`PathError`] and non-numeric or undecodable ids with a [`NotFoundError`].
pub struct BookIdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for BookIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "book_id_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AxumPath(tail) = AxumPath::<String>::from_request_parts(parts, state)
            .await
            .map_err(|path_rejection| {
                tracing::warn!(rejection=?path_rejection, "Rejection");

                // An undecodable segment is still a single segment that is not an id.
                NotFoundError::new(&path_rejection.body_text())
            })?;

        match BookIdSegment::parse(&tail) {
            BookIdSegment::Id(id) => {
                tracing::trace!(id, "Extracted");

                Ok(BookIdPath(id))
            }
            BookIdSegment::Nested => {
                Err(PathError::new(format!("Expected a single path segment, got `{tail}`")).into())
            }
            BookIdSegment::NotNumeric => {
                Err(NotFoundError::new(&format!("Book id `{tail}` is not an integer")).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_segment() {
        assert_eq!(BookIdSegment::parse("42"), BookIdSegment::Id(42));
        assert_eq!(BookIdSegment::parse("/42"), BookIdSegment::Id(42));
        assert_eq!(BookIdSegment::parse("-3"), BookIdSegment::Id(-3));
    }

    #[test]
    fn nested_segments_are_malformed() {
        assert_eq!(BookIdSegment::parse("1/2"), BookIdSegment::Nested);
        assert_eq!(BookIdSegment::parse("1/"), BookIdSegment::Nested);
    }

    #[test]
    fn non_numeric_segment() {
        assert_eq!(BookIdSegment::parse("abc"), BookIdSegment::NotNumeric);
        assert_eq!(BookIdSegment::parse(""), BookIdSegment::NotNumeric);
        assert_eq!(
            BookIdSegment::parse("99999999999999999999"),
            BookIdSegment::NotNumeric
        );
    }
}
