use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListBooksCommandRequest {}

impl ListBooksCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<Book>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.find_all_books()
            .await.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::books::domain::model::Book;
    use crate::books::repository::stub_book_repository::StubBookRepository;
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::domain::service::BookService;
    use crate::core::command::{Command, CommandError};
    use crate::core::library::LibraryError;

    fn build_cmd(repo: StubBookRepository) -> ListBooksCommand {
        ListBooksCommand::new(Box::new(BookService::new(Box::new(repo))))
    }

    #[tokio::test]
    async fn test_should_run_list_books() {
        let books = vec![Book::new("1", "Title1", "Author1"), Book::new("2", "Title2", "Author2")];
        let cmd = build_cmd(StubBookRepository::new().with_all_books(books.clone()));
        let res = cmd.execute(ListBooksCommandRequest::new()).await.expect("should list books");
        assert_eq!(books, res.books);
    }

    #[tokio::test]
    async fn test_should_serialize_empty_listing() {
        let cmd = build_cmd(StubBookRepository::new());
        let res = cmd.execute(ListBooksCommandRequest::new()).await.expect("should list books");
        let json = serde_json::to_value(&res).expect("should serialize response");
        assert_eq!(json!({"books": []}), json);
    }

    #[tokio::test]
    async fn test_should_surface_repository_errors() {
        let cmd = build_cmd(StubBookRepository::new()
            .failing_with(LibraryError::database("scan failed", Some("500".to_string()), false)));
        let err = cmd.execute(ListBooksCommandRequest::new()).await.expect_err("should fail");
        assert_eq!(CommandError::Database {
            message: "scan failed".to_string(),
            reason_code: Some("500".to_string()),
            retryable: false,
        }, err);
    }
}
