use std::sync::Mutex;

use async_trait::async_trait;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository holds the saved records in process memory; nothing
// outlives the process.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Mutex<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new(books: Vec<BookEntity>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn load(&self) -> LibraryResult<Vec<BookEntity>> {
        let books = self.books.lock().map_err(|_| LibraryError::io("in-memory catalog lock poisoned"))?;
        Ok(books.clone())
    }

    async fn save(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        let mut books = self.books.lock().map_err(|_| LibraryError::io("in-memory catalog lock poisoned"))?;
        *books = entities.to_vec();
        Ok(books.len())
    }
}

impl BookRepository for MemoryBookRepository {}
