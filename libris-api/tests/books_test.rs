/// Integration tests for the id-keyed bookshelf endpoints
///
/// Like the catalog, the bookshelf lives entirely in memory; no database is
/// needed.

mod common;

use axum::http::StatusCode;
use common::{assert_status, body_json, empty_request, json_request, TestContext};
use serde_json::json;

#[tokio::test]
async fn test_list_books_returns_seeded_shelf() {
    let ctx = TestContext::new();

    let response = ctx.send(empty_request("GET", "/v1/books")).await;
    let response = assert_status(response, StatusCode::OK).await;

    let books = body_json(response).await;
    assert_eq!(books.as_array().unwrap().len(), 6);
    assert_eq!(books[0]["id"], 1);
    assert_eq!(books[0]["title"], "Computer Science Pro");
}

#[tokio::test]
async fn test_get_book_by_id() {
    let ctx = TestContext::new();

    let response = ctx.send(empty_request("GET", "/v1/books/3")).await;
    let response = assert_status(response, StatusCode::OK).await;

    let book = body_json(response).await;
    assert_eq!(book["title"], "Master Endpoints");
    assert_eq!(book["rating"], 5);
}

#[tokio::test]
async fn test_get_unknown_id_returns_404() {
    let ctx = TestContext::new();

    let response = ctx.send(empty_request("GET", "/v1/books/99")).await;
    assert_status(response, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn test_get_non_positive_id_returns_400() {
    let ctx = TestContext::new();

    let response = ctx.send(empty_request("GET", "/v1/books/0")).await;
    assert_status(response, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn test_get_books_by_rating() {
    let ctx = TestContext::new();

    let response = ctx
        .send(empty_request("GET", "/v1/books/by-rating?rating=5"))
        .await;
    let response = assert_status(response, StatusCode::OK).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);

    // Out-of-range rating is rejected before filtering
    let response = ctx
        .send(empty_request("GET", "/v1/books/by-rating?rating=6"))
        .await;
    assert_status(response, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn test_get_books_by_publish_year() {
    let ctx = TestContext::new();

    let response = ctx
        .send(empty_request("GET", "/v1/books/by-publish-year/2015"))
        .await;
    let response = assert_status(response, StatusCode::OK).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);

    let response = ctx
        .send(empty_request("GET", "/v1/books/by-publish-year/1990"))
        .await;
    assert_status(response, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn test_create_book_assigns_next_id() {
    let ctx = TestContext::new();

    let response = ctx
        .send(json_request(
            "POST",
            "/v1/books",
            json!({
                "title": "A new book",
                "author": "John Doe",
                "description": "This is a new book",
                "rating": 4,
                "publish_year": 2015
            }),
        ))
        .await;
    let response = assert_status(response, StatusCode::CREATED).await;

    let created = body_json(response).await;
    assert_eq!(created["id"], 7);

    let response = ctx.send(empty_request("GET", "/v1/books/7")).await;
    assert_status(response, StatusCode::OK).await;
}

#[tokio::test]
async fn test_create_book_rejects_invalid_payload() {
    let ctx = TestContext::new();

    // Rating out of range and title too short
    let response = ctx
        .send(json_request(
            "POST",
            "/v1/books",
            json!({
                "title": "ab",
                "author": "John Doe",
                "description": "Description",
                "rating": 9,
                "publish_year": 2015
            }),
        ))
        .await;
    let response = assert_status(response, StatusCode::UNPROCESSABLE_ENTITY).await;

    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
    assert!(body["details"].as_array().unwrap().len() >= 2);
}

#[tokio::test]
async fn test_update_book() {
    let ctx = TestContext::new();

    let response = ctx
        .send(json_request(
            "PUT",
            "/v1/books",
            json!({
                "id": 4,
                "title": "HP1",
                "author": "Author 1",
                "description": "Book Description",
                "rating": 5,
                "publish_year": 2015
            }),
        ))
        .await;
    assert_status(response, StatusCode::NO_CONTENT).await;

    let response = ctx.send(empty_request("GET", "/v1/books/4")).await;
    assert_eq!(body_json(response).await["rating"], 5);
}

#[tokio::test]
async fn test_update_book_without_id_returns_400() {
    let ctx = TestContext::new();

    let response = ctx
        .send(json_request(
            "PUT",
            "/v1/books",
            json!({
                "title": "A new book",
                "author": "John Doe",
                "description": "This is a new book",
                "rating": 4,
                "publish_year": 2015
            }),
        ))
        .await;
    assert_status(response, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn test_update_unknown_book_returns_404() {
    let ctx = TestContext::new();

    let response = ctx
        .send(json_request(
            "PUT",
            "/v1/books",
            json!({
                "id": 42,
                "title": "Ghost book",
                "author": "Nobody",
                "description": "Does not exist",
                "rating": 1,
                "publish_year": 2001
            }),
        ))
        .await;
    assert_status(response, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn test_delete_book() {
    let ctx = TestContext::new();

    let response = ctx.send(empty_request("DELETE", "/v1/books/6")).await;
    assert_status(response, StatusCode::NO_CONTENT).await;

    let response = ctx.send(empty_request("DELETE", "/v1/books/6")).await;
    assert_status(response, StatusCode::NOT_FOUND).await;

    let response = ctx.send(empty_request("GET", "/v1/books")).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 5);
}
