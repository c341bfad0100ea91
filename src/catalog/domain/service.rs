use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

// CatalogServiceImpl owns the in-memory records and writes all of them back
// through the repository after every successful mutation.
pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    books: Vec<BookEntity>,
    // highest id ever held by this catalog, new ids are issued above it
    high_water: u64,
}

impl CatalogServiceImpl {
    pub async fn load(config: &Configuration, book_repository: Box<dyn BookRepository>) -> LibraryResult<Self> {
        let books = book_repository.load().await?;
        if books.iter().any(|b| b.id() == 0) {
            return Err(LibraryError::corrupt_store("book ids must be positive, found ID 0"));
        }
        for book in books.iter().filter(|b| !b.status().is_recognized()) {
            warn!(id = book.id(), status = %book.status(), "book has an unrecognized status, keeping it as stored");
        }
        let high_water = books.iter().map(|b| b.id()).max().unwrap_or(0);
        info!(count = books.len(), data_file = %config.data_file.display(), "catalog loaded");
        Ok(Self {
            book_repository,
            books,
            high_water,
        })
    }

    async fn persist(&self) -> LibraryResult<()> {
        self.book_repository.save(&self.books).await.map(|_| ())
    }

    fn position(&self, id: u64) -> LibraryResult<usize> {
        self.books.iter().position(|b| b.id() == id).ok_or_else(|| LibraryError::not_found(id))
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&mut self, title: &str, author: &str, year: i64) -> LibraryResult<BookDto> {
        let id = self.high_water.checked_add(1).ok_or_else(|| {
            LibraryError::corrupt_store(format!("catalog already holds the largest book ID {}", self.high_water).as_str())
        })?;
        self.high_water = id;
        let book = BookEntity::new(id, title, author, year);
        let dto = BookDto::from(&book);
        self.books.push(book);
        self.persist().await?;
        info!(id = dto.id, "book added");
        Ok(dto)
    }

    async fn remove_book(&mut self, id: u64) -> LibraryResult<()> {
        let pos = self.position(id)?;
        self.books.remove(pos);
        self.persist().await?;
        info!(id, "book removed");
        Ok(())
    }

    async fn change_status(&mut self, id: u64, status: &str) -> LibraryResult<BookDto> {
        let status = BookStatus::parse(status)?;
        let pos = self.position(id)?;
        self.books[pos].status = status;
        let dto = BookDto::from(&self.books[pos]);
        self.persist().await?;
        info!(id, status = %dto.status, "book status changed");
        Ok(dto)
    }

    fn search_books(&self, query: &str) -> Vec<BookDto> {
        self.books.iter().filter(|b| b.matches(query)).map(BookDto::from).collect()
    }

    fn list_books(&self) -> Vec<BookDto> {
        self.books.iter().map(BookDto::from).collect()
    }
}
