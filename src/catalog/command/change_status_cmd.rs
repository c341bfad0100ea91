use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ChangeStatusCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ChangeStatusCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeStatusCommandRequest {
    pub id: u64,
    pub status: String,
}

impl ChangeStatusCommandRequest {
    pub fn new(id: u64, status: &str) -> Self {
        Self {
            id,
            status: status.to_string(),
        }
    }
}


#[derive(Debug)]
pub struct ChangeStatusCommandResponse {
    pub book: BookDto,
}

impl ChangeStatusCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl<'a> Command<ChangeStatusCommandRequest, ChangeStatusCommandResponse> for ChangeStatusCommand<'a> {
    async fn execute(&mut self, req: ChangeStatusCommandRequest) -> Result<ChangeStatusCommandResponse, CommandError> {
        self.catalog_service.change_status(req.id, req.status.as_str()).await
            .map_err(CommandError::from).map(ChangeStatusCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::change_status_cmd::{ChangeStatusCommand, ChangeStatusCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::BookStatus;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_change_status() {
        let mut svc = factory::create_catalog_service(&Configuration::default(), RepositoryStore::InMemory).await
            .expect("should create catalog");
        let book = svc.add_book("Foundation", "Asimov", 1951).await.expect("should add book");

        let res = ChangeStatusCommand::new(&mut *svc).execute(ChangeStatusCommandRequest::new(book.id, "lent"))
            .await.expect("should change status");
        assert_eq!(BookStatus::Lent, res.book.status);

        let res = ChangeStatusCommand::new(&mut *svc).execute(ChangeStatusCommandRequest::new(book.id, "lost")).await;
        assert!(matches!(res, Err(CommandError::Validation{ .. })));
        let res = ChangeStatusCommand::new(&mut *svc).execute(ChangeStatusCommandRequest::new(99, "lent")).await;
        assert!(matches!(res, Err(CommandError::NotFound{ .. })));
    }
}
