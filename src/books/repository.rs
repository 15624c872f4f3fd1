#[cfg(test)]
pub(crate) mod stub_book_repository;

use crate::books::domain::model::Book;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<Book> {}

impl<T: Repository<Book>> BookRepository for T {}
