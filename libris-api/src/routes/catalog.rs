/// Title-keyed book catalog endpoints
///
/// The catalog is the simple in-memory book variant: no ids, no validation
/// ranges, title as the key, case-insensitive matching throughout. All
/// endpoints are public.
///
/// # Endpoints
///
/// - `GET /v1/catalog/books` - Whole catalog
/// - `GET /v1/catalog/books/:title` - Lookup by title
/// - `GET /v1/catalog/books/search?category=` - Filter by category
/// - `GET /v1/catalog/books/by-author/:author?category=` - Filter by author and category
/// - `POST /v1/catalog/books` - Append a book
/// - `PUT /v1/catalog/books` - Replace a book matched by title
/// - `DELETE /v1/catalog/books/:title` - Remove by title

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use libris_shared::models::catalog::CatalogBook;
use serde::{Deserialize, Serialize};

/// Category filter query
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: String,
}

/// Simple message response for mutations
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Whole catalog
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<CatalogBook>> {
    let catalog = state.catalog.read().await;
    Json(catalog.list())
}

/// Lookup a book by title, case-insensitively
///
/// # Errors
///
/// - `404 Not Found`: No book with that title
pub async fn get_book_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> ApiResult<Json<CatalogBook>> {
    let catalog = state.catalog.read().await;

    catalog
        .find_by_title(&title)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Book not found".to_string()))
}

/// Filter the catalog by category, case-insensitively
///
/// Returns an empty list when nothing matches.
pub async fn search_by_category(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Json<Vec<CatalogBook>> {
    let catalog = state.catalog.read().await;
    Json(catalog.find_by_category(&query.category))
}

/// Filter the catalog by author and category, case-insensitively
pub async fn search_by_author_and_category(
    State(state): State<AppState>,
    Path(author): Path<String>,
    Query(query): Query<CategoryQuery>,
) -> Json<Vec<CatalogBook>> {
    let catalog = state.catalog.read().await;
    Json(catalog.find_by_author_and_category(&author, &query.category))
}

/// Append a book to the catalog
pub async fn create_book(
    State(state): State<AppState>,
    Json(book): Json<CatalogBook>,
) -> (StatusCode, Json<CatalogBook>) {
    let mut catalog = state.catalog.write().await;
    catalog.insert(book.clone());

    (StatusCode::CREATED, Json(book))
}

/// Replace the catalog entry whose title matches the payload's
///
/// # Errors
///
/// - `404 Not Found`: No entry with a matching title
pub async fn update_book(
    State(state): State<AppState>,
    Json(book): Json<CatalogBook>,
) -> ApiResult<Json<MessageResponse>> {
    let mut catalog = state.catalog.write().await;

    if catalog.update(book) {
        Ok(Json(MessageResponse {
            message: "Book updated".to_string(),
        }))
    } else {
        Err(ApiError::NotFound("Book not found".to_string()))
    }
}

/// Remove a catalog entry by title, case-insensitively
///
/// # Errors
///
/// - `404 Not Found`: No entry with a matching title
pub async fn delete_book(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let mut catalog = state.catalog.write().await;

    if catalog.remove(&title) {
        Ok(Json(MessageResponse {
            message: "Book deleted".to_string(),
        }))
    } else {
        Err(ApiError::NotFound("Book not found".to_string()))
    }
}
