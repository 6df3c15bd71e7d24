//! Books domain methods on Repository

use super::{
    schema::{Column, Entity, Index, TableSchema},
    Repository,
};
use crate::{
    error::AppResult,
    models::{Book, Model},
};

impl Entity for Book {
    const SCHEMA: TableSchema = TableSchema {
        name: "books",
        columns: &[
            Column { name: "title", definition: "TEXT NOT NULL DEFAULT ''" },
            Column { name: "author", definition: "TEXT NOT NULL DEFAULT ''" },
            Column { name: "call_number", definition: "INTEGER NOT NULL DEFAULT 0" },
            // Logical reference to people.id, no constraint
            Column { name: "person_id", definition: "INTEGER NOT NULL DEFAULT 0" },
        ],
        indexes: &[Index { name: "idx_books_deleted_at", column: "deleted_at", unique: false }],
    };

    fn model(&self) -> &Model {
        &self.model
    }
}

impl Repository {
    /// Insert a book, returning it with its id assigned
    pub async fn books_create(&self, book: &Book) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (created_at, updated_at, title, author, call_number, person_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(book.model.created_at)
        .bind(book.model.updated_at)
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.call_number)
        .bind(book.person_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Live books owned by the given person
    pub async fn books_for_person(&self, person_id: i32) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE person_id = $1 AND deleted_at IS NULL",
        )
        .bind(person_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
