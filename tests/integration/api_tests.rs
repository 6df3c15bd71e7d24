//! API integration tests
//!
//! Need a running server connected to a scratch database, and
//! `DATABASE_URL` pointing at that same database.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde_json::{json, Value};
use sqlx::PgPool;

const BASE_URL: &str = "http://localhost:8080";

async fn database() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    PgPool::connect(&url).await.expect("Failed to connect to database")
}

async fn create_person(client: &Client, name: &str, email: &str) -> Value {
    let response = client
        .post(format!("{}/create/person", BASE_URL))
        .json(&json!({ "Name": name, "Email": email }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    response.json().await.expect("Failed to parse response")
}

async fn create_book(client: &Client, title: &str, person_id: i64) -> Value {
    let response = client
        .post(format!("{}/create/book", BASE_URL))
        .json(&json!({
            "Title": title,
            "Author": "Anonymous",
            "CallNumber": 100,
            "PersonID": person_id
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    response.json().await.expect("Failed to parse response")
}

async fn get(client: &Client, path: &str) -> Value {
    let response = client
        .get(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    response.json().await.expect("Failed to parse response")
}

fn unique_email(tag: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}@example.com", tag, nanos)
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_create_and_get_person() {
    let client = Client::new();
    let email = unique_email("ada");

    let created = create_person(&client, "Ada", &email).await;
    assert!(created["Error"].is_null());
    assert_eq!(created["RowsAffected"], 1);

    let person = &created["Value"];
    let id = person["ID"].as_i64().expect("No person ID");
    assert!(id > 0);
    assert_eq!(person["Name"], "Ada");
    assert_eq!(person["Email"], email.as_str());
    assert_eq!(person["Books"], json!([]));

    let fetched = get(&client, &format!("/person/{}", id)).await;
    assert_eq!(fetched["ID"], id);
    assert_eq!(fetched["Name"], "Ada");
    assert_eq!(fetched["Email"], email.as_str());
    assert_eq!(fetched["Books"], json!([]));
}

#[tokio::test]
#[ignore]
async fn test_unknown_id_returns_zero_value() {
    let client = Client::new();

    let book = get(&client, "/book/2147483647").await;
    assert_eq!(book["ID"], 0);
    assert_eq!(book["Title"], "");

    let person = get(&client, "/person/2147483647").await;
    assert_eq!(person["ID"], 0);
    assert_eq!(person["Name"], "");
}

#[tokio::test]
#[ignore]
async fn test_get_person_loads_books_but_list_does_not() {
    let client = Client::new();
    let created = create_person(&client, "Grace", &unique_email("grace")).await;
    let id = created["Value"]["ID"].as_i64().expect("No person ID");

    create_book(&client, "Compilers", id).await;
    create_book(&client, "Flow-Matic", id).await;

    let person = get(&client, &format!("/person/{}", id)).await;
    assert_eq!(person["Books"].as_array().map(Vec::len), Some(2));

    let people = get(&client, "/people").await;
    let listed = people
        .as_array()
        .expect("People is not an array")
        .iter()
        .find(|p| p["ID"] == id)
        .expect("Person missing from list");
    assert_eq!(listed["Books"], json!([]));
}

#[tokio::test]
#[ignore]
async fn test_book_with_dangling_owner() {
    let client = Client::new();

    let created = create_book(&client, "Orphan", 2147483647).await;
    assert!(created["Error"].is_null());
    assert!(created["Value"]["ID"].as_i64().unwrap_or(0) > 0);
    assert_eq!(created["Value"]["PersonID"], 2147483647_i64);
}

#[tokio::test]
#[ignore]
async fn test_delete_person_is_soft() {
    let client = Client::new();
    let created = create_person(&client, "Hedy", &unique_email("hedy")).await;
    let id = created["Value"]["ID"].as_i64().expect("No person ID");

    let response = client
        .delete(format!("{}/delete/person/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let deleted: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(deleted["ID"], id);
    assert!(deleted["DeletedAt"].is_string());

    let fetched = get(&client, &format!("/person/{}", id)).await;
    assert_eq!(fetched["ID"], 0);

    let people = get(&client, "/people").await;
    assert!(!people
        .as_array()
        .expect("People is not an array")
        .iter()
        .any(|p| p["ID"] == id));

    // The row is kept, only marked
    let pool = database().await;
    let deleted_at: Option<DateTime<Utc>> =
        sqlx::query_scalar("SELECT deleted_at FROM people WHERE id = $1")
            .bind(id as i32)
            .fetch_one(&pool)
            .await
            .expect("Deleted person row is gone");
    assert!(deleted_at.is_some());
}

#[tokio::test]
#[ignore]
async fn test_create_person_with_nested_books() {
    let client = Client::new();

    let response = client
        .post(format!("{}/create/person", BASE_URL))
        .json(&json!({
            "Name": "Bob",
            "Email": unique_email("bob"),
            "Books": [
                { "Title": "Nested", "CallNumber": 1, "PersonID": 2147483647 },
                { "title": "Second" }
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let created: Value = response.json().await.expect("Failed to parse response");
    assert!(created["Error"].is_null());
    let id = created["Value"]["ID"].as_i64().expect("No person ID");
    let books = created["Value"]["Books"].as_array().expect("Books is not an array");
    assert_eq!(books.len(), 2);
    assert!(books.iter().all(|b| b["PersonID"] == id));
    assert!(books.iter().all(|b| b["ID"].as_i64().unwrap_or(0) > 0));

    let person = get(&client, &format!("/person/{}", id)).await;
    let titles: Vec<_> = person["Books"]
        .as_array()
        .expect("Books is not an array")
        .iter()
        .map(|b| b["Title"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"Nested".to_string()));
    assert!(titles.contains(&"Second".to_string()));
}

#[tokio::test]
#[ignore]
async fn test_duplicate_email_reported_in_body() {
    let client = Client::new();
    let email = unique_email("dup");

    create_person(&client, "First", &email).await;
    let second = create_person(&client, "Second", &email).await;

    assert!(second["Error"].is_string());
    assert_eq!(second["RowsAffected"], 0);
    assert_eq!(second["Value"]["ID"], 0);
}

#[tokio::test]
#[ignore]
async fn test_malformed_body_creates_zero_value_book() {
    let client = Client::new();

    let response = client
        .post(format!("{}/create/book", BASE_URL))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["Value"]["Title"], "");
    assert_eq!(body["Value"]["CallNumber"], 0);
}
