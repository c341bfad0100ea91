use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchBooksCommandRequest {
    pub query: String,
}

impl SearchBooksCommandRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}


#[derive(Debug)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl<'a> Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'a> {
    async fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        Ok(SearchBooksCommandResponse::new(self.catalog_service.search_books(req.query.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_search_books() {
        let mut svc = factory::create_catalog_service(&Configuration::default(), RepositoryStore::InMemory).await
            .expect("should create catalog");
        let _ = svc.add_book("Dune", "Herbert", 1965).await.expect("should add book");
        let _ = svc.add_book("Foundation", "Asimov", 1951).await.expect("should add book");

        let res = SearchBooksCommand::new(&*svc).execute(SearchBooksCommandRequest::new("herb"))
            .await.expect("should search books");
        assert_eq!(1, res.books.len());
        assert_eq!("Dune", res.books[0].title.as_str());

        let res = SearchBooksCommand::new(&*svc).execute(SearchBooksCommandRequest::new("1984"))
            .await.expect("should search books");
        assert!(res.books.is_empty());
    }
}
