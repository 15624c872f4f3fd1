use async_trait::async_trait;
use tracing::debug;
use crate::books::domain::model::Book;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::library::{LibraryError, LibraryResult};

pub struct BookService {
    book_repository: Box<dyn BookRepository>,
}

impl BookService {
    pub fn new(book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for BookService {
    async fn find_all_books(&self) -> LibraryResult<Vec<Book>> {
        let books = self.book_repository.find_all().await?;
        if books.is_none() {
            debug!("book repository returned no list, answering with empty catalog");
        }
        Ok(books.unwrap_or_default())
    }

    async fn find_book_by_id(&self, id: Option<&str>) -> LibraryResult<Option<Book>> {
        let id = validate_book_id(id)?;
        let book = self.book_repository.find_by_id(id).await?;
        if book.is_none() {
            debug!(book_id = id, "book not found");
        }
        Ok(book)
    }
}

// The id is passed on exactly as given; only presence and non-blankness are checked.
fn validate_book_id(id: Option<&str>) -> LibraryResult<&str> {
    match id {
        None => {
            debug!("rejecting lookup without book id");
            Err(LibraryError::null_argument("book id must be supplied"))
        }
        // blank means only Unicode White_Space, as str::trim counts it (NBSP included)
        Some(id) if id.trim().is_empty() => {
            debug!(book_id = id, "rejecting blank book id");
            Err(LibraryError::illegal_argument(
                format!("book id must not be blank: {:?}", id).as_str()))
        }
        Some(id) => Ok(id),
    }
}
