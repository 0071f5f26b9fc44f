use crate::domain::{Book, BookId};

/// The books known to the library, in the order they were added.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a book. Callers check for an existing id first.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn find(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn find_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.id == id)
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.find(id).is_some()
    }

    /// Mark a book as on loan. Returns false if the id is unknown.
    pub fn mark_issued(&mut self, id: BookId) -> bool {
        match self.find_mut(id) {
            Some(book) => {
                book.mark_issued();
                true
            }
            None => false,
        }
    }

    /// Mark a book as back on the shelf. Returns false if the id is unknown.
    pub fn mark_returned(&mut self, id: BookId) -> bool {
        match self.find_mut(id) {
            Some(book) => {
                book.mark_returned();
                true
            }
            None => false,
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add(Book::new(1, "Dune", "Frank Herbert"));
        catalog.add(Book::new(2, "Emma", "Jane Austen"));
        catalog
    }

    #[test]
    fn test_find() {
        let catalog = sample_catalog();
        assert_eq!(catalog.find(2).map(|b| b.title.as_str()), Some("Emma"));
        assert!(catalog.find(3).is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_mark_issued_and_returned() {
        let mut catalog = sample_catalog();

        assert!(catalog.mark_issued(1));
        assert!(!catalog.find(1).unwrap().is_available());
        assert!(catalog.find(2).unwrap().is_available());

        assert!(catalog.mark_returned(1));
        assert!(catalog.find(1).unwrap().is_available());
    }

    #[test]
    fn test_mark_unknown_book_is_noop() {
        let mut catalog = sample_catalog();
        assert!(!catalog.mark_issued(42));
        assert!(!catalog.mark_returned(42));
    }

    #[test]
    fn test_books_keep_insertion_order() {
        let catalog = sample_catalog();
        let ids: Vec<BookId> = catalog.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
