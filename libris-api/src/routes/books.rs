/// Id-keyed bookshelf endpoints
///
/// The bookshelf is the second in-memory book variant: books carry an
/// integer id assigned by the shelf, request bodies go through the schema
/// layer, and misses are 404s. All endpoints are public.
///
/// # Endpoints
///
/// - `GET /v1/books` - Whole shelf
/// - `GET /v1/books/:id` - Lookup by id
/// - `GET /v1/books/by-rating?rating=` - Filter by rating
/// - `GET /v1/books/by-publish-year/:year` - Filter by publish year
/// - `POST /v1/books` - Add a book (id assigned by the shelf)
/// - `PUT /v1/books` - Replace the book with the payload's id
/// - `DELETE /v1/books/:id` - Remove by id

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use libris_shared::models::book::Book;
use serde::Deserialize;
use validator::Validate;

/// Book create/update request
///
/// `id` is ignored on create (the shelf assigns one) and required on update.
#[derive(Debug, Deserialize, Validate)]
pub struct BookRequest {
    /// Required for updates, ignored on create
    pub id: Option<i64>,

    /// Title
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,

    /// Author
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,

    /// Short description
    #[validate(length(min = 1, max = 100, message = "Description must be 1-100 characters"))]
    pub description: String,

    /// Rating, 1 to 5
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,

    /// Year of publication
    #[validate(range(min = 1001, max = 2024, message = "Publish year must be 1001-2024"))]
    pub publish_year: i32,
}

impl BookRequest {
    fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            description: self.description,
            rating: self.rating,
            publish_year: self.publish_year,
        }
    }
}

/// Rating filter query
#[derive(Debug, Deserialize)]
pub struct RatingQuery {
    pub rating: i32,
}

/// Whole shelf
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    let shelf = state.bookshelf.read().await;
    Json(shelf.list())
}

/// Lookup a book by id
///
/// # Errors
///
/// - `400 Bad Request`: Non-positive id
/// - `404 Not Found`: No book with that id
pub async fn get_book_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Book>> {
    if id < 1 {
        return Err(ApiError::BadRequest("Id must be greater than 0".to_string()));
    }

    let shelf = state.bookshelf.read().await;

    shelf
        .find_by_id(id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Requested book not found".to_string()))
}

/// Filter the shelf by exact rating
///
/// # Errors
///
/// - `400 Bad Request`: Rating outside 1..=5
pub async fn get_books_by_rating(
    State(state): State<AppState>,
    Query(query): Query<RatingQuery>,
) -> ApiResult<Json<Vec<Book>>> {
    if !(1..=5).contains(&query.rating) {
        return Err(ApiError::BadRequest(
            "Rating must be between 1 and 5".to_string(),
        ));
    }

    let shelf = state.bookshelf.read().await;
    Ok(Json(shelf.find_by_rating(query.rating)))
}

/// Filter the shelf by exact publish year
///
/// # Errors
///
/// - `400 Bad Request`: Year outside 1991..=2024
pub async fn get_books_by_publish_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> ApiResult<Json<Vec<Book>>> {
    if !(1991..=2024).contains(&year) {
        return Err(ApiError::BadRequest(
            "Publish year must be 1991-2024".to_string(),
        ));
    }

    let shelf = state.bookshelf.read().await;
    Ok(Json(shelf.find_by_publish_year(year)))
}

/// Add a book to the shelf
///
/// The shelf assigns the id; any id in the payload is ignored.
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Validation failed
pub async fn create_book(
    State(state): State<AppState>,
    Json(req): Json<BookRequest>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    req.validate()?;

    let mut shelf = state.bookshelf.write().await;
    let book = shelf.insert(req.into_book(0));

    Ok((StatusCode::CREATED, Json(book)))
}

/// Replace the book with the payload's id
///
/// # Errors
///
/// - `400 Bad Request`: Payload has no id
/// - `404 Not Found`: No book with that id
/// - `422 Unprocessable Entity`: Validation failed
pub async fn update_book(
    State(state): State<AppState>,
    Json(req): Json<BookRequest>,
) -> ApiResult<StatusCode> {
    req.validate()?;

    let id = req
        .id
        .ok_or_else(|| ApiError::BadRequest("Id is required for updates".to_string()))?;

    let mut shelf = state.bookshelf.write().await;

    if shelf.update(req.into_book(id)) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Book not found".to_string()))
    }
}

/// Remove a book by id
///
/// # Errors
///
/// - `404 Not Found`: No book with that id
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    let mut shelf = state.bookshelf.write().await;

    if shelf.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Book not found".to_string()))
    }
}
