use serde::{Deserialize, Serialize};

// Book is a catalog record as handed out by a book repository. The catalog only reads
// and forwards it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(id: &str, title: &str, author: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}
