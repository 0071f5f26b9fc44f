use serde::{Deserialize, Serialize};

pub type BookId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// False while the book is on loan to some member.
    pub available: bool,
}

impl Book {
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            available: true,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn mark_issued(&mut self) {
        self.available = false;
    }

    pub fn mark_returned(&mut self) {
        self.available = true;
    }
}
