//! API integration tests
//!
//! These drive a running server over HTTP. Start one locally, then run
//! with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5000";

/// Create a library and return its id
async fn create_library(client: &Client, name: &str, password: &str) -> i64 {
    let response = client
        .post(format!("{}/library", BASE_URL))
        .json(&json!({ "name": name, "password": password }))
        .send()
        .await
        .expect("Failed to send create library request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse library");
    body["library_id"].as_i64().expect("No library_id")
}

/// Add a member to a library and return its id
async fn add_member(client: &Client, library_id: i64, name: &str) -> i64 {
    let response = client
        .post(format!("{}/library/{}/members", BASE_URL, library_id))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send add member request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse member");
    body["member_id"].as_i64().expect("No member_id")
}

/// Add a book to a library and return its id
async fn add_book(client: &Client, library_id: i64, title: &str, isbn: &str) -> i64 {
    let response = client
        .post(format!("{}/library/{}/books", BASE_URL, library_id))
        .json(&json!({ "title": title, "author": "Herbert", "isbn": isbn }))
        .send()
        .await
        .expect("Failed to send add book request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse book");
    assert_eq!(body["status"], "available");
    body["book_id"].as_i64().expect("No book_id")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_library_crud() {
    let client = Client::new();
    let library_id = create_library(&client, "Central", "pw").await;

    // Read it back; every column is serialized flat
    let response = client
        .get(format!("{}/library/{}", BASE_URL, library_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Central");
    assert_eq!(body["password"], "pw");

    // Partial update: only the name changes
    let response = client
        .put(format!("{}/library/{}", BASE_URL, library_id))
        .json(&json!({ "name": "Central Annex" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Central Annex");
    assert_eq!(body["password"], "pw");

    // Delete, then 404
    let response = client
        .delete(format!("{}/library/{}", BASE_URL, library_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/library/{}", BASE_URL, library_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Library not found");
}

#[tokio::test]
#[ignore]
async fn test_create_library_requires_name_and_password() {
    let client = Client::new();

    let response = client
        .post(format!("{}/library", BASE_URL))
        .json(&json!({ "password": "pw" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Invalid name");

    let response = client
        .post(format!("{}/library", BASE_URL))
        .json(&json!({ "name": "No Password" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Invalid password");
}

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = Client::new();
    let library_id = create_library(&client, "Login Branch", "secret").await;

    // Wrong password
    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "libraryId": library_id, "password": "wrong" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid Library ID or password");

    // Correct password
    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "libraryId": library_id, "password": "secret" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(body["libraryId"].as_i64(), Some(library_id));

    // Missing credentials
    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "libraryId": library_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Library ID and password are required");
}

#[tokio::test]
#[ignore]
async fn test_lend_and_return_cycle() {
    let client = Client::new();
    let library_id = create_library(&client, "Lending Branch", "pw").await;
    let member_id = add_member(&client, library_id, "Ann").await;
    let book_id = add_book(&client, library_id, "Dune", "X1").await;

    // Lend
    let response = client
        .post(format!("{}/library/{}/lend", BASE_URL, library_id))
        .json(&json!({ "book_id": book_id, "member_id": member_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book lent successfully");
    assert_eq!(body["book"]["status"], "borrowed");
    assert_eq!(body["book"]["lent_to"].as_i64(), Some(member_id));
    assert!(body["book"]["lent_date"].is_string());

    // A second lend of the same book fails and leaves the loan intact
    let response = client
        .post(format!("{}/library/{}/lend", BASE_URL, library_id))
        .json(&json!({ "book_id": book_id, "member_id": member_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Book is already borrowed");

    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "borrowed");
    assert_eq!(body["lent_to"].as_i64(), Some(member_id));

    // Return
    let response = client
        .post(format!("{}/library/{}/return", BASE_URL, library_id))
        .json(&json!({ "book_id": book_id, "member_id": member_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book returned successfully");
    assert_eq!(body["book"]["status"], "available");
    assert!(body["book"]["lent_to"].is_null());
    assert!(body["book"]["lent_date"].is_null());

    // The book can be lent again after the cycle
    let response = client
        .post(format!("{}/library/{}/lend", BASE_URL, library_id))
        .json(&json!({ "book_id": book_id, "member_id": member_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_return_is_idempotent() {
    let client = Client::new();
    let library_id = create_library(&client, "Idempotent Branch", "pw").await;
    let member_id = add_member(&client, library_id, "Ben").await;
    let book_id = add_book(&client, library_id, "Solaris", "X2").await;

    // Returning a book that was never lent reconciles it to available
    let response = client
        .post(format!("{}/library/{}/return", BASE_URL, library_id))
        .json(&json!({ "book_id": book_id, "member_id": member_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["book"]["status"], "available");
    assert!(body["book"]["lent_to"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_lend_rejects_entities_outside_library_scope() {
    let client = Client::new();
    let library_id = create_library(&client, "Scoped Branch", "pw").await;
    let other_library_id = create_library(&client, "Other Branch", "pw").await;
    let member_id = add_member(&client, library_id, "Cleo").await;
    let foreign_member_id = add_member(&client, other_library_id, "Drew").await;
    let book_id = add_book(&client, library_id, "Hyperion", "X3").await;

    // Member from another library cannot borrow here
    let response = client
        .post(format!("{}/library/{}/lend", BASE_URL, library_id))
        .json(&json!({ "book_id": book_id, "member_id": foreign_member_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Book or member not found in this library");

    // Missing ids resolve the same way
    let response = client
        .post(format!("{}/library/{}/lend", BASE_URL, library_id))
        .json(&json!({ "member_id": member_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_member_survives_library_detachment() {
    let client = Client::new();
    let library_id = create_library(&client, "Detach Branch", "pw").await;
    let member_id = add_member(&client, library_id, "Eve").await;

    let response = client
        .delete(format!(
            "{}/library/{}/members/{}",
            BASE_URL, library_id, member_id
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    // The entity persists globally
    let response = client
        .get(format!("{}/members/{}", BASE_URL, member_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Eve");

    // Detaching again reports the missing association
    let response = client
        .delete(format!(
            "{}/library/{}/members/{}",
            BASE_URL, library_id, member_id
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Member does not belong to this library");
}

#[tokio::test]
#[ignore]
async fn test_book_deletion_cascades() {
    let client = Client::new();
    let library_id = create_library(&client, "Cascade Branch", "pw").await;
    let member_id = add_member(&client, library_id, "Finn").await;

    // An ebook, currently lent out
    let response = client
        .post(format!("{}/library/{}/books", BASE_URL, library_id))
        .json(&json!({
            "title": "Neuromancer", "author": "Gibson", "isbn": "X4",
            "file_format": "epub"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let book_id = body["book_id"].as_i64().expect("No book_id");

    let response = client
        .post(format!("{}/library/{}/lend", BASE_URL, library_id))
        .json(&json!({ "book_id": book_id, "member_id": member_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // Deleting the book removes it along with its ebook and loan record
    let response = client
        .delete(format!(
            "{}/library/{}/books/{}",
            BASE_URL, library_id, book_id
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book deleted successfully");

    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    // The member can be deleted afterwards; no loan record blocks it
    let response = client
        .delete(format!(
            "{}/library/{}/members/{}",
            BASE_URL, library_id, member_id
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
    let response = client
        .delete(format!("{}/members/{}", BASE_URL, member_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_empty_library_listing_asymmetry() {
    let client = Client::new();
    let library_id = create_library(&client, "Empty Branch", "pw").await;

    // No members is a valid empty listing
    let response = client
        .get(format!("{}/library/{}/members", BASE_URL, library_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body.as_array().map(Vec::len), Some(0));

    // No books reports not-found
    let response = client
        .get(format!("{}/library/{}/books", BASE_URL, library_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "No books found for this library");
}

#[tokio::test]
#[ignore]
async fn test_member_scoping_and_updates() {
    let client = Client::new();
    let library_id = create_library(&client, "Scope Branch", "pw").await;
    let member_id = add_member(&client, library_id, "Gil").await;

    // Member is visible within the library's scope
    let response = client
        .get(format!(
            "{}/library/{}/members/{}",
            BASE_URL, library_id, member_id
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // A standalone member is not
    let response = client
        .post(format!("{}/members", BASE_URL))
        .json(&json!({ "name": "Hana" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let outsider_id = body["member_id"].as_i64().expect("No member_id");

    let response = client
        .get(format!(
            "{}/library/{}/members/{}",
            BASE_URL, library_id, outsider_id
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Member not found");

    // Rename through the global route
    let response = client
        .put(format!("{}/members/{}", BASE_URL, member_id))
        .json(&json!({ "name": "Gillian" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Gillian");
}

#[tokio::test]
#[ignore]
async fn test_global_book_crud() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": "Ubik", "author": "Dick", "isbn": "X5" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let book_id = body["book_id"].as_i64().expect("No book_id");
    assert_eq!(body["status"], "available");

    // Missing fields are rejected
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": "No Author" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Missing required book fields");

    // Partial update keeps untouched fields
    let response = client
        .put(format!("{}/books/{}", BASE_URL, book_id))
        .json(&json!({ "title": "Ubik (revised)" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Ubik (revised)");
    assert_eq!(body["author"], "Dick");
    assert_eq!(body["isbn"], "X5");
}
