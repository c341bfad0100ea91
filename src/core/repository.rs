use async_trait::async_trait;
use crate::core::library::LibraryResult;

// Repository persists the whole collection at once: load reads every record,
// save replaces every record.
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // load all entities, an absent store yields none
    async fn load(&self) -> LibraryResult<Vec<Entity>>;

    // overwrite the store with the given entities
    async fn save(&self, entities: &[Entity]) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
    InMemory,
}

#[cfg(test)]
mod tests {
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_create_repository_store() {
        assert_ne!(RepositoryStore::JsonFile, RepositoryStore::InMemory);
    }
}
