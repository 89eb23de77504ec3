/// API route handlers
///
/// Handlers are organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Registration and login
/// - `users`: Current-user endpoints
/// - `todos`: Per-user todo CRUD
/// - `catalog`: Title-keyed in-memory book catalog
/// - `books`: Id-keyed in-memory bookshelf

pub mod auth;
pub mod books;
pub mod catalog;
pub mod health;
pub mod todos;
pub mod users;
