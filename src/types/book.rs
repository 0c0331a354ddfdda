use serde::{Deserialize, Serialize};

/// A row of the `books` table.
///
/// The id is supplied by the caller on insert, it is never generated.
/// Fields missing from a request body decode to zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Book {
    #[serde(rename = "bookid")]
    #[sqlx(rename = "bookid")]
    pub id: i64,
    #[serde(rename = "bookname")]
    #[sqlx(rename = "bookname")]
    pub name: String,
    pub author: String,
    pub genre: String,
    pub publisher: String,
}
