//! People endpoints

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};

use crate::models::{CreatePerson, Person, PersonCreateResult};

use super::decode_lenient;

/// Get a person with their books
#[utoipa::path(
    get,
    path = "/person/{id}",
    tag = "people",
    params(("id" = String, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person with books, zero value if not found", body = Person)
    )
)]
pub async fn get_person(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> Json<Person> {
    Json(state.services.catalog.get_person(&id).await)
}

/// List all people
#[utoipa::path(
    get,
    path = "/people",
    tag = "people",
    responses(
        (status = 200, description = "People list, books not loaded", body = Vec<Person>)
    )
)]
pub async fn list_people(State(state): State<crate::AppState>) -> Json<Vec<Person>> {
    Json(state.services.catalog.list_people().await)
}

/// Create a person
#[utoipa::path(
    post,
    path = "/create/person",
    tag = "people",
    request_body = CreatePerson,
    responses(
        (status = 200, description = "Create result wrapping the person", body = PersonCreateResult)
    )
)]
pub async fn create_person(
    State(state): State<crate::AppState>,
    body: Bytes,
) -> Json<PersonCreateResult> {
    let data: CreatePerson = decode_lenient(&body);
    Json(state.services.catalog.create_person(data).await)
}

/// Soft-delete a person
#[utoipa::path(
    delete,
    path = "/delete/person/{id}",
    tag = "people",
    params(("id" = String, Path, description = "Person ID")),
    responses(
        (status = 200, description = "The deleted person", body = Person)
    )
)]
pub async fn delete_person(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> Json<Person> {
    Json(state.services.catalog.delete_person(&id).await)
}
