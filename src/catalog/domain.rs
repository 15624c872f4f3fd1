pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::Book;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    // all books known to the repository; never absent
    async fn find_all_books(&self) -> LibraryResult<Vec<Book>>;

    // a book by identifier, None when the repository has no such book
    async fn find_book_by_id(&self, id: Option<&str>) -> LibraryResult<Option<Book>>;
}
