//! API handlers for the catalog REST endpoints

pub mod books;
pub mod openapi;
pub mod people;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    models::{FromJsonFields, JsonFields},
    AppState,
};

/// Decode a JSON body field by field; absent, malformed or mistyped parts stay zero
pub fn decode_lenient<T: FromJsonFields>(body: &[u8]) -> T {
    T::from_fields(&JsonFields::parse(body))
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let catalog = Router::new()
        // Books
        .route("/books", get(books::list_books))
        .route("/book/:id", get(books::get_book))
        // People
        .route("/people", get(people::list_people))
        .route("/person/:id", get(people::get_person))
        // Create
        .route("/create/person", post(people::create_person))
        .route("/create/book", post(books::create_book))
        // Delete
        .route("/delete/person/:id", delete(people::delete_person))
        .route("/delete/book/:id", delete(books::delete_book))
        .with_state(state);

    Router::new()
        .merge(catalog)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
}
