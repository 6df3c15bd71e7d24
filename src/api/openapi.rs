//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, people};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Catalog API",
        version = "0.1.0",
        description = "People and books catalog REST API"
    ),
    paths(
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::delete_book,
        // People
        people::list_people,
        people::get_person,
        people::create_person,
        people::delete_person,
    ),
    components(
        schemas(
            crate::models::Model,
            crate::models::Book,
            crate::models::CreateBook,
            crate::models::BookCreateResult,
            crate::models::Person,
            crate::models::CreatePerson,
            crate::models::PersonCreateResult,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "books", description = "Book records"),
        (name = "people", description = "Person records and the books they hold")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
