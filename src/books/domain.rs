use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn year(&self) -> i64;
    fn status(&self) -> &BookStatus;

    // A query matches on a case-insensitive substring of title or author,
    // or on the exact decimal year.
    fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title().to_lowercase().contains(&needle)
            || self.author().to_lowercase().contains(&needle)
            || query == self.year().to_string()
    }
}
