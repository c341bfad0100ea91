pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&mut self, title: &str, author: &str, year: i64) -> LibraryResult<BookDto>;
    async fn remove_book(&mut self, id: u64) -> LibraryResult<()>;
    async fn change_status(&mut self, id: u64, status: &str) -> LibraryResult<BookDto>;
    fn search_books(&self, query: &str) -> Vec<BookDto>;
    fn list_books(&self) -> Vec<BookDto>;
}
