use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// JsonBookRepository keeps the catalog as a single JSON array of book objects.
// Every save rewrites the whole file in place.
#[derive(Debug)]
pub struct JsonBookRepository {
    path: PathBuf,
}

impl JsonBookRepository {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn to_json(entities: &[BookEntity]) -> LibraryResult<Vec<u8>> {
        let mut ser = serde_json::Serializer::with_formatter(Vec::new(), PrettyFormatter::with_indent(b"    "));
        entities.serialize(&mut ser)?;
        Ok(ser.into_inner())
    }
}

#[async_trait]
impl Repository<BookEntity> for JsonBookRepository {
    async fn load(&self) -> LibraryResult<Vec<BookEntity>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no catalog file yet, starting empty");
                return Ok(vec![]);
            }
            Err(err) => return Err(LibraryError::from(err)),
        };
        let books: Vec<BookEntity> = serde_json::from_str(&content).map_err(|err| {
            LibraryError::corrupt_store(format!("{}: {}", self.path.display(), err).as_str())
        })?;
        debug!(path = %self.path.display(), count = books.len(), "loaded catalog file");
        Ok(books)
    }

    async fn save(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        let json = Self::to_json(entities)?;
        tokio::fs::write(&self.path, json).await?;
        debug!(path = %self.path.display(), count = entities.len(), "saved catalog file");
        Ok(entities.len())
    }
}

impl BookRepository for JsonBookRepository {}
