//! Database models, initialization and the entity repository

pub mod artists;
pub mod init;
pub mod models;
pub mod shows;
pub mod venues;

pub use init::*;
pub use models::*;

use sqlx::SqlitePool;

/// Entity repository over an injected connection pool
///
/// Cheap to clone; every clone shares the same pool. Write operations run in
/// a scoped transaction that is committed on success and rolled back when
/// dropped on any error path.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Case-insensitive substring matcher for name search
///
/// Folding is done with Unicode lowercasing; SQLite's `LIKE` only folds ASCII.
pub(crate) struct NameMatcher {
    needle: String,
}

impl NameMatcher {
    pub(crate) fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    pub(crate) fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matcher_folds_case() {
        let matcher = NameMatcher::new("hop");
        assert!(matcher.matches("The Hop"));
        assert!(matcher.matches("HOPSCOTCH"));
        assert!(!matcher.matches("Blue Note"));
    }

    #[test]
    fn test_name_matcher_folds_non_ascii() {
        let matcher = NameMatcher::new("café étoile");
        assert!(matcher.matches("Café Étoile"));
        assert!(NameMatcher::new("ÉTOILE").matches("Café Étoile"));
    }

    #[test]
    fn test_name_matcher_literal_and_empty_terms() {
        assert!(NameMatcher::new("").matches("Anything"));
        assert!(!NameMatcher::new("%").matches("The Hop"));
        assert!(NameMatcher::new("50%_off").matches("Club 50%_OFF"));
    }
}
