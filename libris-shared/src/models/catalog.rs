/// The simple book catalog
///
/// A flat, title-keyed list of books with no ids and no persistence; the
/// whole collection lives in memory and every mutation is a direct list
/// mutation. All matching — title, author, category — is case-insensitive.
///
/// This is one of the two independent book variants; the other, id-keyed one
/// is in [`crate::models::book`].

use serde::{Deserialize, Serialize};

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogBook {
    pub title: String,
    pub author: String,
    pub category: String,
}

/// In-memory book catalog
///
/// Held behind a `tokio::sync::RwLock` in the application state.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<CatalogBook>,
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-populated with the sample collection
    pub fn seeded() -> Self {
        let mk = |title: &str, author: &str, category: &str| CatalogBook {
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
        };

        Self {
            books: vec![
                mk("Title One", "Author One", "Science"),
                mk("Title Two", "Author Two", "Science"),
                mk("Title Three", "Author Three", "History"),
                mk("Title Four", "Author Four", "Math"),
                mk("Title Five", "Author Five", "Geography"),
            ],
        }
    }

    /// Returns every book in the catalog
    pub fn list(&self) -> Vec<CatalogBook> {
        self.books.clone()
    }

    /// Looks up a book by title, case-insensitively
    pub fn find_by_title(&self, title: &str) -> Option<CatalogBook> {
        self.books
            .iter()
            .find(|b| eq_ignore_case(&b.title, title))
            .cloned()
    }

    /// Returns every book in a category, case-insensitively
    pub fn find_by_category(&self, category: &str) -> Vec<CatalogBook> {
        self.books
            .iter()
            .filter(|b| eq_ignore_case(&b.category, category))
            .cloned()
            .collect()
    }

    /// Returns books matching both author and category, case-insensitively
    pub fn find_by_author_and_category(&self, author: &str, category: &str) -> Vec<CatalogBook> {
        self.books
            .iter()
            .filter(|b| eq_ignore_case(&b.author, author) && eq_ignore_case(&b.category, category))
            .cloned()
            .collect()
    }

    /// Appends a book to the catalog
    pub fn insert(&mut self, book: CatalogBook) {
        self.books.push(book);
    }

    /// Replaces the entry whose title matches the replacement's, case-insensitively
    ///
    /// Returns true if an entry was replaced.
    pub fn update(&mut self, book: CatalogBook) -> bool {
        match self
            .books
            .iter_mut()
            .find(|b| eq_ignore_case(&b.title, &book.title))
        {
            Some(slot) => {
                *slot = book;
                true
            }
            None => false,
        }
    }

    /// Removes the first entry with a matching title, case-insensitively
    ///
    /// Returns true if an entry was removed.
    pub fn remove(&mut self, title: &str) -> bool {
        match self.books.iter().position(|b| eq_ignore_case(&b.title, title)) {
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

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.list().len(), 5);
    }

    #[test]
    fn test_find_by_title_case_insensitive() {
        let catalog = Catalog::seeded();

        let book = catalog.find_by_title("title one").expect("Should find book");
        assert_eq!(book.title, "Title One");
        assert_eq!(book.author, "Author One");

        assert!(catalog.find_by_title("Title Nine").is_none());
    }

    #[test]
    fn test_find_by_category() {
        let catalog = Catalog::seeded();

        assert_eq!(catalog.find_by_category("SCIENCE").len(), 2);
        assert_eq!(catalog.find_by_category("history").len(), 1);
        assert!(catalog.find_by_category("Poetry").is_empty());
    }

    #[test]
    fn test_find_by_author_and_category() {
        let catalog = Catalog::seeded();

        let matches = catalog.find_by_author_and_category("author two", "science");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Title Two");

        assert!(catalog
            .find_by_author_and_category("author two", "history")
            .is_empty());
    }

    #[test]
    fn test_insert_update_remove() {
        let mut catalog = Catalog::new();

        catalog.insert(CatalogBook {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            category: "Science Fiction".to_string(),
        });
        assert_eq!(catalog.list().len(), 1);

        let updated = catalog.update(CatalogBook {
            title: "DUNE".to_string(),
            author: "F. Herbert".to_string(),
            category: "Science Fiction".to_string(),
        });
        assert!(updated);
        assert_eq!(catalog.list()[0].author, "F. Herbert");

        let updated = catalog.update(CatalogBook {
            title: "Missing".to_string(),
            author: "Nobody".to_string(),
            category: "None".to_string(),
        });
        assert!(!updated);

        assert!(catalog.remove("dune"));
        assert!(!catalog.remove("dune"));
        assert!(catalog.list().is_empty());
    }
}
