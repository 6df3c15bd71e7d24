//! Person (library patron) model

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{Book, CreateBook, FromJsonFields, JsonFields, Model};

/// Person record as stored and returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Person {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub model: Model,
    #[serde(rename = "Name")]
    pub name: String,
    /// Unique index at the storage layer only
    #[serde(rename = "Email")]
    pub email: String,
    /// Loaded when a single person is fetched or created with books
    #[serde(rename = "Books")]
    #[sqlx(skip)]
    pub books: Vec<Book>,
}

/// Create person request
#[derive(Debug, Clone, Default, PartialEq, ToSchema)]
pub struct CreatePerson {
    #[schema(rename = "Name")]
    pub name: String,
    #[schema(rename = "Email")]
    pub email: String,
    /// Created along with the person and owned by it
    #[schema(rename = "Books")]
    pub books: Vec<CreateBook>,
}

impl FromJsonFields for CreatePerson {
    fn from_fields(fields: &JsonFields) -> Self {
        Self {
            name: fields.get("Name"),
            email: fields.get("Email"),
            books: fields.list("Books"),
        }
    }
}

impl From<CreatePerson> for Person {
    fn from(data: CreatePerson) -> Self {
        Self {
            name: data.name,
            email: data.email,
            books: data.books.into_iter().map(Book::from).collect(),
            ..Default::default()
        }
    }
}
