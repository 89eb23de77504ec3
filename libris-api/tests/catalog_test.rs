/// Integration tests for the title-keyed catalog endpoints
///
/// The catalog lives entirely in memory, so these tests drive the real
/// router without a database.

mod common;

use axum::http::StatusCode;
use common::{assert_status, body_json, empty_request, json_request, TestContext};
use serde_json::json;

#[tokio::test]
async fn test_list_books_returns_seeded_catalog() {
    let ctx = TestContext::new();

    let response = ctx.send(empty_request("GET", "/v1/catalog/books")).await;
    let response = assert_status(response, StatusCode::OK).await;

    let books = body_json(response).await;
    assert_eq!(books.as_array().unwrap().len(), 5);
    assert_eq!(books[0]["title"], "Title One");
    assert_eq!(books[0]["category"], "Science");
}

#[tokio::test]
async fn test_get_book_by_title_is_case_insensitive() {
    let ctx = TestContext::new();

    let response = ctx
        .send(empty_request("GET", "/v1/catalog/books/title%20two"))
        .await;
    let response = assert_status(response, StatusCode::OK).await;

    let book = body_json(response).await;
    assert_eq!(book["title"], "Title Two");
    assert_eq!(book["author"], "Author Two");
}

#[tokio::test]
async fn test_get_unknown_title_returns_404() {
    let ctx = TestContext::new();

    let response = ctx
        .send(empty_request("GET", "/v1/catalog/books/No%20Such%20Book"))
        .await;
    assert_status(response, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn test_search_by_category() {
    let ctx = TestContext::new();

    let response = ctx
        .send(empty_request("GET", "/v1/catalog/books/search?category=SCIENCE"))
        .await;
    let response = assert_status(response, StatusCode::OK).await;

    let books = body_json(response).await;
    assert_eq!(books.as_array().unwrap().len(), 2);

    // Unknown category yields an empty list, not an error
    let response = ctx
        .send(empty_request("GET", "/v1/catalog/books/search?category=Poetry"))
        .await;
    let response = assert_status(response, StatusCode::OK).await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_by_author_and_category() {
    let ctx = TestContext::new();

    let response = ctx
        .send(empty_request(
            "GET",
            "/v1/catalog/books/by-author/author%20one?category=science",
        ))
        .await;
    let response = assert_status(response, StatusCode::OK).await;

    let books = body_json(response).await;
    assert_eq!(books.as_array().unwrap().len(), 1);
    assert_eq!(books[0]["title"], "Title One");

    // Author exists but not in that category
    let response = ctx
        .send(empty_request(
            "GET",
            "/v1/catalog/books/by-author/author%20one?category=history",
        ))
        .await;
    let response = assert_status(response, StatusCode::OK).await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_book_appends_to_catalog() {
    let ctx = TestContext::new();

    let response = ctx
        .send(json_request(
            "POST",
            "/v1/catalog/books",
            json!({
                "title": "Title Six",
                "author": "Author Six",
                "category": "Philosophy"
            }),
        ))
        .await;
    let response = assert_status(response, StatusCode::CREATED).await;

    let created = body_json(response).await;
    assert_eq!(created["title"], "Title Six");

    let response = ctx.send(empty_request("GET", "/v1/catalog/books")).await;
    let books = body_json(response).await;
    assert_eq!(books.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_update_book_matches_title_case_insensitively() {
    let ctx = TestContext::new();

    let response = ctx
        .send(json_request(
            "PUT",
            "/v1/catalog/books",
            json!({
                "title": "TITLE THREE",
                "author": "A New Author",
                "category": "History"
            }),
        ))
        .await;
    let response = assert_status(response, StatusCode::OK).await;
    assert_eq!(body_json(response).await["message"], "Book updated");

    let response = ctx
        .send(empty_request("GET", "/v1/catalog/books/Title%20Three"))
        .await;
    let book = body_json(response).await;
    assert_eq!(book["author"], "A New Author");
}

#[tokio::test]
async fn test_update_unknown_book_returns_404() {
    let ctx = TestContext::new();

    let response = ctx
        .send(json_request(
            "PUT",
            "/v1/catalog/books",
            json!({
                "title": "Nowhere Book",
                "author": "Nobody",
                "category": "None"
            }),
        ))
        .await;
    assert_status(response, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn test_delete_book() {
    let ctx = TestContext::new();

    let response = ctx
        .send(empty_request("DELETE", "/v1/catalog/books/title%20five"))
        .await;
    let response = assert_status(response, StatusCode::OK).await;
    assert_eq!(body_json(response).await["message"], "Book deleted");

    // Second delete misses
    let response = ctx
        .send(empty_request("DELETE", "/v1/catalog/books/title%20five"))
        .await;
    assert_status(response, StatusCode::NOT_FOUND).await;

    let response = ctx.send(empty_request("GET", "/v1/catalog/books")).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 4);
}
