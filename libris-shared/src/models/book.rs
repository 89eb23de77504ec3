/// The id-keyed bookshelf
///
/// The second of the two independent book variants: books carry an integer
/// id, a rating, and a publish year, and the shelf assigns ids on insert.
/// Like the catalog, the whole collection lives in memory; unlike the
/// catalog, lookups are by id and misses are surfaced to callers so the API
/// layer can 404.

use serde::{Deserialize, Serialize};

/// A shelved book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique id, assigned by the shelf
    pub id: i64,

    /// Title
    pub title: String,

    /// Author
    pub author: String,

    /// Short description
    pub description: String,

    /// Rating, 1 to 5
    pub rating: i32,

    /// Year of publication
    pub publish_year: i32,
}

/// In-memory bookshelf with id assignment
///
/// New ids are one past the last book's id, so ids stay increasing even
/// after deletions. Held behind a `tokio::sync::RwLock` in the application
/// state.
#[derive(Debug, Default)]
pub struct Bookshelf {
    books: Vec<Book>,
}

impl Bookshelf {
    /// Creates an empty shelf
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shelf pre-populated with the sample collection
    pub fn seeded() -> Self {
        let mk = |id: i64, title: &str, description: &str, author: &str, rating: i32, year: i32| {
            Book {
                id,
                title: title.to_string(),
                author: author.to_string(),
                description: description.to_string(),
                rating,
                publish_year: year,
            }
        };

        Self {
            books: vec![
                mk(1, "Computer Science Pro", "A very nice book", "Coding With Roby", 5, 2013),
                mk(2, "Be Fast With FastAPI", "A great book", "Coding With Roby", 5, 2014),
                mk(3, "Master Endpoints", "An awesome book", "Coding With Roby", 5, 2009),
                mk(4, "HP1", "Book Description", "Author 1", 2, 2015),
                mk(5, "HP2", "Book Description", "Author 2", 1, 2015),
                mk(6, "HP3", "Book Description", "Author 3", 3, 2015),
            ],
        }
    }

    /// Returns every book on the shelf
    pub fn list(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Looks up a book by id
    pub fn find_by_id(&self, id: i64) -> Option<Book> {
        self.books.iter().find(|b| b.id == id).cloned()
    }

    /// Returns every book with the given rating
    pub fn find_by_rating(&self, rating: i32) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| b.rating == rating)
            .cloned()
            .collect()
    }

    /// Returns every book published in the given year
    pub fn find_by_publish_year(&self, year: i32) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| b.publish_year == year)
            .cloned()
            .collect()
    }

    /// Next id to assign: one past the last book's id, 1 on an empty shelf
    fn next_id(&self) -> i64 {
        self.books.last().map_or(1, |b| b.id + 1)
    }

    /// Adds a book to the shelf, assigning its id
    ///
    /// Returns the stored book with the assigned id.
    pub fn insert(&mut self, mut book: Book) -> Book {
        book.id = self.next_id();
        self.books.push(book.clone());
        book
    }

    /// Replaces the book with the replacement's id
    ///
    /// Returns true if a book was replaced.
    pub fn update(&mut self, book: Book) -> bool {
        match self.books.iter_mut().find(|b| b.id == book.id) {
            Some(slot) => {
                *slot = book;
                true
            }
            None => false,
        }
    }

    /// Removes a book by id
    ///
    /// Returns true if a book was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        match self.books.iter().position(|b| b.id == id) {
            Some(index) => {
                self.books.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(title: &str) -> Book {
        Book {
            id: 0,
            title: title.to_string(),
            author: "Test Author".to_string(),
            description: "A test book".to_string(),
            rating: 4,
            publish_year: 2015,
        }
    }

    #[test]
    fn test_seeded_shelf() {
        let shelf = Bookshelf::seeded();
        assert_eq!(shelf.list().len(), 6);
        assert_eq!(shelf.find_by_id(1).unwrap().title, "Computer Science Pro");
    }

    #[test]
    fn test_id_assignment() {
        let mut shelf = Bookshelf::new();

        let first = shelf.insert(sample("First"));
        assert_eq!(first.id, 1);

        let second = shelf.insert(sample("Second"));
        assert_eq!(second.id, 2);

        // Ids keep increasing past deletions
        assert!(shelf.remove(2));
        let third = shelf.insert(sample("Third"));
        assert_eq!(third.id, 2);

        // Removing the tail reuses its id, matching last-plus-one assignment
        assert_eq!(shelf.list().len(), 2);
    }

    #[test]
    fn test_id_assignment_on_seeded_shelf() {
        let mut shelf = Bookshelf::seeded();
        let added = shelf.insert(sample("Seventh"));
        assert_eq!(added.id, 7);
    }

    #[test]
    fn test_find_by_rating() {
        let shelf = Bookshelf::seeded();
        assert_eq!(shelf.find_by_rating(5).len(), 3);
        assert_eq!(shelf.find_by_rating(1).len(), 1);
        assert!(shelf.find_by_rating(4).is_empty());
    }

    #[test]
    fn test_find_by_publish_year() {
        let shelf = Bookshelf::seeded();
        assert_eq!(shelf.find_by_publish_year(2015).len(), 3);
        assert_eq!(shelf.find_by_publish_year(2013).len(), 1);
        assert!(shelf.find_by_publish_year(1999).is_empty());
    }

    #[test]
    fn test_update() {
        let mut shelf = Bookshelf::seeded();

        let mut book = shelf.find_by_id(4).unwrap();
        book.rating = 5;
        assert!(shelf.update(book));
        assert_eq!(shelf.find_by_id(4).unwrap().rating, 5);

        let mut missing = sample("Ghost");
        missing.id = 99;
        assert!(!shelf.update(missing));
    }

    #[test]
    fn test_remove() {
        let mut shelf = Bookshelf::seeded();
        assert!(shelf.remove(6));
        assert!(!shelf.remove(6));
        assert_eq!(shelf.list().len(), 5);
    }
}
