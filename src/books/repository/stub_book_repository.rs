use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::books::domain::model::Book;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// StubBookRepository replays canned answers and counts lookups.
#[derive(Debug, Default)]
pub(crate) struct StubBookRepository {
    all_books: Option<Vec<Book>>,
    books_by_id: HashMap<String, Book>,
    failure: Option<LibraryError>,
    find_by_id_calls: Arc<AtomicUsize>,
}

impl StubBookRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_all_books(mut self, books: Vec<Book>) -> Self {
        self.all_books = Some(books);
        self
    }

    pub(crate) fn with_book(mut self, book: Book) -> Self {
        self.books_by_id.insert(book.id.to_string(), book);
        self
    }

    pub(crate) fn failing_with(mut self, err: LibraryError) -> Self {
        self.failure = Some(err);
        self
    }

    pub(crate) fn find_by_id_calls(&self) -> Arc<AtomicUsize> {
        self.find_by_id_calls.clone()
    }
}

#[async_trait]
impl Repository<Book> for StubBookRepository {
    async fn find_all(&self) -> LibraryResult<Option<Vec<Book>>> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(self.all_books.clone())
    }

    async fn find_by_id(&self, id: &str) -> LibraryResult<Option<Book>> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(self.books_by_id.get(id).cloned())
    }
}
