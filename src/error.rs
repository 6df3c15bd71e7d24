//! Error types for the library catalog server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Schema reconciliation failed for table {table}: {source}")]
    Migration {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Config"),
            AppError::Connection(_) => (StatusCode::SERVICE_UNAVAILABLE, "Connection"),
            AppError::Migration { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "Migration"),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database")
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
