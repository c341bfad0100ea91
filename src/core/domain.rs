use std::path::PathBuf;
use tracing::Level;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> u64;
}

pub const DEFAULT_DATA_FILE: &str = "data.json";

// Configuration abstracts config options for the catalog tool
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub data_file: PathBuf,
    pub log_level: Level,
}

impl Configuration {
    pub fn new(data_file: &str) -> Self {
        Configuration {
            data_file: PathBuf::from(data_file),
            log_level: Level::WARN,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_DATA_FILE)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tracing::Level;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::default();
        assert_eq!(PathBuf::from("data.json"), config.data_file);
        assert_eq!(Level::WARN, config.log_level);
    }

    #[tokio::test]
    async fn test_should_build_config_for_path() {
        let config = Configuration::new("/tmp/books.json");
        assert_eq!(PathBuf::from("/tmp/books.json"), config.data_file);
    }
}
