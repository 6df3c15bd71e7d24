//! Book model

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{FromJsonFields, JsonFields, Model};

/// Book record as stored and returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Book {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub model: Model,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "CallNumber")]
    pub call_number: i32,
    /// Owning person id, 0 when unowned. Not checked against `people`.
    #[serde(rename = "PersonID")]
    pub person_id: i32,
}

/// Create book request
#[derive(Debug, Clone, Default, PartialEq, ToSchema)]
pub struct CreateBook {
    #[schema(rename = "Title")]
    pub title: String,
    #[schema(rename = "Author")]
    pub author: String,
    #[schema(rename = "CallNumber")]
    pub call_number: i32,
    #[schema(rename = "PersonID")]
    pub person_id: i32,
}

impl FromJsonFields for CreateBook {
    fn from_fields(fields: &JsonFields) -> Self {
        Self {
            title: fields.get("Title"),
            author: fields.get("Author"),
            call_number: fields.get("CallNumber"),
            person_id: fields.get("PersonID"),
        }
    }
}

impl From<CreateBook> for Book {
    fn from(data: CreateBook) -> Self {
        Self {
            title: data.title,
            author: data.author,
            call_number: data.call_number,
            person_id: data.person_id,
            ..Default::default()
        }
    }
}
