/// Data models for Libris
///
/// # Models
///
/// - `user`: User accounts backed by the `users` table
/// - `todo`: Per-user todo items backed by the `todos` table
/// - `book`: The bookshelf — id-keyed books held in memory
/// - `catalog`: The simple title-keyed book catalog held in memory
///
/// The relational models follow the same shape: a row struct deriving
/// `sqlx::FromRow`, a `Create*` input struct, and associated functions taking
/// a `&PgPool`.

pub mod book;
pub mod catalog;
pub mod todo;
pub mod user;
