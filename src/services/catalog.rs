//! Catalog service: people and books
//!
//! Callers always get a value back. Database failures are logged here and
//! replaced by the zero value (or, for creates, reported inside the
//! [`CreateResult`]), so every catalog route answers 200.

use chrono::Utc;

use crate::{
    error::AppResult,
    models::{Book, CreateBook, CreatePerson, CreateResult, Person},
    repository::{schema::Entity, Repository},
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

/// Unwrap a repository result, logging and substituting the zero value on error
fn or_zero<T: Default>(result: AppResult<T>, operation: &str) -> T {
    result.unwrap_or_else(|e| {
        tracing::error!("Failed to {}: {}", operation, e);
        T::default()
    })
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a person with their books attached
    pub async fn get_person(&self, id: &str) -> Person {
        let mut person: Person = or_zero(self.repository.find_by_id(id).await, "get person");
        if person.model.is_stored() {
            person.books = or_zero(
                self.repository.books_for_person(person.model.id).await,
                "load books of person",
            );
        }
        person
    }

    /// List people; books are not loaded
    pub async fn list_people(&self) -> Vec<Person> {
        or_zero(self.repository.find_all().await, "list people")
    }

    /// Create a person, then any books submitted with it, owned by the new id.
    /// Books are inserted one by one and stop at the first failure.
    pub async fn create_person(&self, data: CreatePerson) -> CreateResult<Person> {
        let now = Utc::now();
        let mut person = Person::from(data);
        person.model.stamp(now);
        let books = person.books.clone();

        let result = self.repository.people_create(&person).await;
        let mut outcome = into_create_result(result, person, "person");
        if outcome.error.is_some() {
            return outcome;
        }

        for mut book in books {
            book.person_id = outcome.value.model.id;
            book.model.stamp(now);
            match self.repository.books_create(&book).await {
                Ok(created) => outcome.value.books.push(created),
                Err(e) => {
                    tracing::error!(
                        "Failed to create book for person {}: {}",
                        outcome.value.model.id,
                        e
                    );
                    outcome.error = Some(e.to_string());
                    break;
                }
            }
        }
        outcome
    }

    pub async fn delete_person(&self, id: &str) -> Person {
        self.delete(id, "person").await
    }

    pub async fn get_book(&self, id: &str) -> Book {
        or_zero(self.repository.find_by_id(id).await, "get book")
    }

    pub async fn list_books(&self) -> Vec<Book> {
        or_zero(self.repository.find_all().await, "list books")
    }

    /// Create a book. The owner id is stored as given.
    pub async fn create_book(&self, data: CreateBook) -> CreateResult<Book> {
        let mut book = Book::from(data);
        book.model.stamp(Utc::now());
        let result = self.repository.books_create(&book).await;
        into_create_result(result, book, "book")
    }

    pub async fn delete_book(&self, id: &str) -> Book {
        self.delete(id, "book").await
    }

    async fn delete<T: Entity>(&self, id: &str, kind: &str) -> T {
        let record: T = or_zero(
            self.repository.find_by_id(id).await,
            &format!("find {} to delete", kind),
        );
        match self.repository.soft_delete(&record).await {
            Ok(deleted) => deleted,
            Err(e) => {
                tracing::error!("Failed to delete {} {}: {}", kind, record.model().id, e);
                record
            }
        }
    }
}

fn into_create_result<T>(result: AppResult<T>, submitted: T, kind: &str) -> CreateResult<T>
where
    T: Entity + for<'a> utoipa::ToSchema<'a>,
{
    match result {
        Ok(created) => {
            tracing::info!("Created {} {}", kind, created.model().id);
            CreateResult {
                value: created,
                error: None,
                rows_affected: 1,
            }
        }
        Err(e) => {
            tracing::error!("Failed to create {}: {}", kind, e);
            CreateResult {
                value: submitted,
                error: Some(e.to_string()),
                rows_affected: 0,
            }
        }
    }
}
