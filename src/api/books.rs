//! Books endpoints

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};

use crate::models::{Book, BookCreateResult, CreateBook};

use super::decode_lenient;

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/book/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book, zero value if not found", body = Book)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> Json<Book> {
    Json(state.services.catalog.get_book(&id).await)
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Book list", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<Book>> {
    Json(state.services.catalog.list_books().await)
}

/// Create a book
#[utoipa::path(
    post,
    path = "/create/book",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 200, description = "Create result wrapping the book", body = BookCreateResult)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    body: Bytes,
) -> Json<BookCreateResult> {
    let data: CreateBook = decode_lenient(&body);
    Json(state.services.catalog.create_book(data).await)
}

/// Soft-delete a book
#[utoipa::path(
    delete,
    path = "/delete/book/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "The deleted book", body = Book)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> Json<Book> {
    Json(state.services.catalog.delete_book(&id).await)
}
