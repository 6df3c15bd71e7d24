//! Table declarations and startup schema reconciliation
//!
//! Every entity declares its table once. On startup each table is created if
//! missing, then missing columns and indexes are added. All statements use
//! `IF NOT EXISTS`, so running this against an up-to-date database is a no-op.

use sqlx::{postgres::PgRow, FromRow, PgPool};

use crate::{
    error::{AppError, AppResult},
    models::Model,
};

/// A column and its Postgres type definition
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub definition: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Index {
    pub name: &'static str,
    pub column: &'static str,
    pub unique: bool,
}

/// Declared shape of one entity table
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub name: &'static str,
    /// Business columns; the shared model columns are always prepended
    pub columns: &'static [Column],
    pub indexes: &'static [Index],
}

/// Columns backing [`Model`]
pub const MODEL_COLUMNS: &[Column] = &[
    Column { name: "id", definition: "SERIAL PRIMARY KEY" },
    Column { name: "created_at", definition: "TIMESTAMPTZ NOT NULL DEFAULT NOW()" },
    Column { name: "updated_at", definition: "TIMESTAMPTZ NOT NULL DEFAULT NOW()" },
    Column { name: "deleted_at", definition: "TIMESTAMPTZ" },
];

/// A record type persisted in its own table
pub trait Entity: for<'r> FromRow<'r, PgRow> + Default + Clone + Send + Unpin {
    const SCHEMA: TableSchema;

    fn model(&self) -> &Model;
}

impl TableSchema {
    fn all_columns(&self) -> impl Iterator<Item = &'static Column> {
        MODEL_COLUMNS.iter().chain(self.columns.iter())
    }

    pub fn create_table_sql(&self) -> String {
        let columns: Vec<String> = self
            .all_columns()
            .map(|c| format!("{} {}", c.name, c.definition))
            .collect();
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.name,
            columns.join(", ")
        )
    }

    pub fn add_columns_sql(&self) -> Vec<String> {
        self.all_columns()
            .map(|c| {
                format!(
                    "ALTER TABLE {} ADD COLUMN IF NOT EXISTS {} {}",
                    self.name, c.name, c.definition
                )
            })
            .collect()
    }

    pub fn create_indexes_sql(&self) -> Vec<String> {
        self.indexes
            .iter()
            .map(|i| {
                format!(
                    "CREATE {}INDEX IF NOT EXISTS {} ON {} ({})",
                    if i.unique { "UNIQUE " } else { "" },
                    i.name,
                    self.name,
                    i.column
                )
            })
            .collect()
    }
}

/// Bring every given table in line with its declaration
pub async fn reconcile(pool: &PgPool, tables: &[TableSchema]) -> AppResult<()> {
    for table in tables {
        let statements = std::iter::once(table.create_table_sql())
            .chain(table.add_columns_sql())
            .chain(table.create_indexes_sql());

        for sql in statements {
            tracing::debug!(table = table.name, "{}", sql);
            sqlx::query(&sql)
                .execute(pool)
                .await
                .map_err(|source| AppError::Migration {
                    table: table.name,
                    source,
                })?;
        }
        tracing::info!(table = table.name, "Table reconciled");
    }
    Ok(())
}
