use std::fmt;
use std::fmt::{Display, Formatter};
use crate::books::domain::model::BookEntity;
use crate::core::library::BookStatus;

// BookDto is a data transfer object handed out by the Catalog service; the
// service keeps its own records.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDto {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i64,
    pub status: BookStatus,
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            status: other.status.clone(),
        }
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
               self.id, self.title, self.author, self.year, self.status)
    }
}
