use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    #[serde(default)]
    pub book_id: Option<String>,
}

impl GetBookCommandRequest {
    pub fn new(book_id: Option<String>) -> Self {
        Self {
            book_id,
        }
    }

    pub fn from_json(json: Value) -> Result<Self, CommandError> {
        Ok(serde_json::from_value(json)?)
    }
}

#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: Option<Book>,
}

impl GetBookCommandResponse {
    pub fn new(book: Option<Book>) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id.as_deref())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}
