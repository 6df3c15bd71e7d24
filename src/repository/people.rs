//! People domain methods on Repository

use super::{
    schema::{Column, Entity, Index, TableSchema},
    Repository,
};
use crate::{
    error::AppResult,
    models::{Model, Person},
};

impl Entity for Person {
    const SCHEMA: TableSchema = TableSchema {
        name: "people",
        columns: &[
            Column { name: "name", definition: "TEXT NOT NULL DEFAULT ''" },
            Column { name: "email", definition: "TEXT NOT NULL DEFAULT ''" },
        ],
        indexes: &[
            Index { name: "idx_people_deleted_at", column: "deleted_at", unique: false },
            Index { name: "uix_people_email", column: "email", unique: true },
        ],
    };

    fn model(&self) -> &Model {
        &self.model
    }
}

impl Repository {
    /// Insert a person, returning it with its id assigned
    pub async fn people_create(&self, person: &Person) -> AppResult<Person> {
        let row = sqlx::query_as::<_, Person>(
            r#"
            INSERT INTO people (created_at, updated_at, name, email)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(person.model.created_at)
        .bind(person.model.updated_at)
        .bind(&person.name)
        .bind(&person.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
