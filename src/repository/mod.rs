//! Repository layer for database operations

pub mod books;
pub mod people;
pub mod schema;

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Book, Person},
};
use schema::Entity;

/// Every table the catalog owns, in creation order
pub const TABLES: [schema::TableSchema; 2] = [Person::SCHEMA, Book::SCHEMA];

/// Main repository struct holding the shared database handle
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

/// Path ids are forwarded untouched; anything that is not an integer matches no row
fn parse_id(id: &str) -> Option<i32> {
    id.parse().ok()
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create or alter the catalog tables to match their declarations
    pub async fn reconcile_schema(&self) -> AppResult<()> {
        schema::reconcile(&self.pool, &TABLES).await
    }

    /// Get a live record by primary key, or the zero value when none matches
    pub async fn find_by_id<T: Entity>(&self, id: &str) -> AppResult<T> {
        let Some(id) = parse_id(id) else {
            return Ok(T::default());
        };

        let query = format!(
            "SELECT * FROM {} WHERE id = $1 AND deleted_at IS NULL",
            T::SCHEMA.name
        );
        let row = sqlx::query_as::<_, T>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.unwrap_or_default())
    }

    /// List all live records in storage order
    pub async fn find_all<T: Entity>(&self) -> AppResult<Vec<T>> {
        let query = format!("SELECT * FROM {} WHERE deleted_at IS NULL", T::SCHEMA.name);
        let rows = sqlx::query_as::<_, T>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Mark a record deleted. Related rows are left alone.
    pub async fn soft_delete<T: Entity>(&self, record: &T) -> AppResult<T> {
        if !record.model().is_stored() {
            return Ok(record.clone());
        }

        let query = format!(
            "UPDATE {} SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL RETURNING *",
            T::SCHEMA.name
        );
        let row = sqlx::query_as::<_, T>(&query)
            .bind(Utc::now())
            .bind(record.model().id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.unwrap_or_else(|| record.clone()))
    }
}
