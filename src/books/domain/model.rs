use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookEntity is the persisted form of a catalog record, one object per book
// in the catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i64,
    pub status: BookStatus,
}

impl BookEntity {
    pub fn new(id: u64, title: &str, author: &str, year: i64) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            year,
            status: BookStatus::Available,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn year(&self) -> i64 {
        self.year
    }

    fn status(&self) -> &BookStatus {
        &self.status
    }
}
