//! Data models for the library catalog

pub mod book;
pub mod fields;
pub mod person;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

pub use book::{Book, CreateBook};
pub use fields::{FromJsonFields, JsonFields};
pub use person::{CreatePerson, Person};

/// Seconds from the Unix epoch to 0001-01-01T00:00:00Z
const ZERO_TIME_SECS: i64 = -62_135_596_800;

/// Timestamp reported for records that were never stored
pub fn zero_time() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ZERO_TIME_SECS, 0).unwrap_or_default()
}

/// Identity, timestamps and soft-delete marker shared by every entity
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Model {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,
    /// Set when the record has been soft-deleted
    #[serde(rename = "DeletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            id: 0,
            created_at: zero_time(),
            updated_at: zero_time(),
            deleted_at: None,
        }
    }
}

impl Model {
    /// A record that matched no row carries id 0
    pub fn is_stored(&self) -> bool {
        self.id != 0
    }

    /// Set both timestamps ahead of an insert
    pub fn stamp(&mut self, now: DateTime<Utc>) {
        self.created_at = now;
        self.updated_at = now;
    }
}

/// Outcome of an insert, mirroring the record plus any database error
#[derive(Debug, Serialize, ToSchema)]
#[aliases(PersonCreateResult = CreateResult<Person>, BookCreateResult = CreateResult<Book>)]
pub struct CreateResult<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// The record, with generated fields filled in when the insert succeeded
    #[serde(rename = "Value")]
    pub value: T,
    /// Database error message, if the insert failed
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "RowsAffected")]
    pub rows_affected: u64,
}
