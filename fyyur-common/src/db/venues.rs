//! Venue database operations

use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, Row, Sqlite};
use tracing::{debug, info};

use super::{NameMatcher, NewVenue, Repository, Show, Venue};
use crate::view::{encode_genres, SearchResults};
use crate::{Error, Result};

macro_rules! venue_columns {
    () => {
        "id, name, city, state, address, phone, image_link, facebook_link, \
         genres, website, seeking_talent, seeking_description"
    };
}

fn venue_from_row(row: &SqliteRow) -> Venue {
    Venue {
        id: row.get("id"),
        name: row.get("name"),
        city: row.get("city"),
        state: row.get("state"),
        address: row.get("address"),
        phone: row.get("phone"),
        image_link: row.get("image_link"),
        facebook_link: row.get("facebook_link"),
        genres: row.get("genres"),
        website: row.get("website"),
        seeking_talent: row.get("seeking_talent"),
        seeking_description: row.get("seeking_description"),
    }
}

/// Load a venue through any executor (pool or open transaction)
pub(crate) async fn fetch_venue<'e, E>(executor: E, venue_id: i64) -> Result<Option<Venue>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query(concat!("SELECT ", venue_columns!(), " FROM Venue WHERE id = ?"))
        .bind(venue_id)
        .fetch_optional(executor)
        .await?;

    Ok(row.as_ref().map(venue_from_row))
}

impl Repository {
    /// Insert a venue in a scoped transaction and return the stored row
    pub async fn create_venue(&self, venue: &NewVenue) -> Result<Venue> {
        let mut tx = self.pool().begin().await?;

        let venue_id = sqlx::query(
            r#"
            INSERT INTO Venue (
                name, city, state, address, phone, image_link, facebook_link,
                genres, website, seeking_talent, seeking_description
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&venue.name)
        .bind(&venue.city)
        .bind(&venue.state)
        .bind(&venue.address)
        .bind(&venue.phone)
        .bind(&venue.image_link)
        .bind(&venue.facebook_link)
        .bind(encode_genres(&venue.genres))
        .bind(&venue.website)
        .bind(venue.seeking_talent)
        .bind(&venue.seeking_description)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let created = fetch_venue(&mut *tx, venue_id)
            .await?
            .ok_or_else(|| Error::Internal(format!("Venue {} vanished after insert", venue_id)))?;

        tx.commit().await?;

        info!(venue_id, "Created venue '{}'", created.name);
        Ok(created)
    }

    /// Look up a venue by id
    pub async fn find_venue(&self, venue_id: i64) -> Result<Option<Venue>> {
        fetch_venue(self.pool(), venue_id).await
    }

    /// All venues in natural storage order
    pub async fn list_venues(&self) -> Result<Vec<Venue>> {
        let rows = sqlx::query(concat!("SELECT ", venue_columns!(), " FROM Venue ORDER BY id"))
            .fetch_all(self.pool())
            .await?;

        Ok(rows.iter().map(venue_from_row).collect())
    }

    /// Case-insensitive substring search over venue names
    pub async fn search_venues(&self, term: &str) -> Result<SearchResults> {
        let matcher = NameMatcher::new(term);
        let venues: Vec<Venue> = self
            .list_venues()
            .await?
            .into_iter()
            .filter(|venue| matcher.matches(&venue.name))
            .collect();
        debug!("Venue search '{}' matched {} rows", term, venues.len());

        Ok(SearchResults::from_records(&venues))
    }

    /// Shows held at a venue, in natural storage order
    pub async fn shows_for_venue(&self, venue_id: i64) -> Result<Vec<Show>> {
        super::shows::fetch_shows_where(self.pool(), "venue_id = ?", venue_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_in_memory;

    fn new_venue(name: &str, city: &str, state: &str) -> NewVenue {
        NewVenue {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: Some("1015 Folsom Street".to_string()),
            genres: vec!["Jazz".to_string(), "Pop".to_string()],
            ..Default::default()
        }
    }

    async fn repo() -> Repository {
        Repository::new(connect_in_memory().await.expect("in-memory database"))
    }

    #[tokio::test]
    async fn test_create_and_find_venue() {
        let repo = repo().await;

        let created = repo
            .create_venue(&new_venue("The Musical Hop", "San Francisco", "CA"))
            .await
            .expect("Failed to create venue");

        assert!(created.id > 0);
        assert_eq!(created.genres, "[Jazz,Pop]");
        assert!(!created.seeking_talent);

        let loaded = repo
            .find_venue(created.id)
            .await
            .expect("Failed to load venue")
            .expect("Venue not found");

        assert_eq!(loaded, created);
    }

    #[tokio::test]
    async fn test_find_missing_venue_is_none() {
        let repo = repo().await;
        assert!(repo.find_venue(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_venues_in_storage_order() {
        let repo = repo().await;
        for name in ["First", "Second", "Third"] {
            repo.create_venue(&new_venue(name, "SF", "CA")).await.unwrap();
        }

        let names: Vec<String> = repo
            .list_venues()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.name)
            .collect();

        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn test_search_venues_case_insensitive_substring() {
        let repo = repo().await;
        repo.create_venue(&new_venue("The Hop", "SF", "CA")).await.unwrap();
        repo.create_venue(&new_venue("Blue Note", "NYC", "NY")).await.unwrap();

        let results = repo.search_venues("hop").await.unwrap();
        assert_eq!(results.count, 1);
        assert_eq!(results.data[0].name, "The Hop");
        assert_eq!(results.data[0].num_upcoming_shows, 0);

        let results = repo.search_venues("E").await.unwrap();
        assert_eq!(results.count, 2);
    }

    #[tokio::test]
    async fn test_search_venues_treats_wildcards_literally() {
        let repo = repo().await;
        repo.create_venue(&new_venue("The Hop", "SF", "CA")).await.unwrap();

        let results = repo.search_venues("%").await.unwrap();
        assert_eq!(results.count, 0);
        assert!(results.data.is_empty());
    }

    #[tokio::test]
    async fn test_search_venues_folds_non_ascii_case() {
        let repo = repo().await;
        repo.create_venue(&new_venue("Café Étoile", "Montréal", "QC")).await.unwrap();
        repo.create_venue(&new_venue("The Hop", "SF", "CA")).await.unwrap();

        let results = repo.search_venues("café étoile").await.unwrap();
        assert_eq!(results.count, 1);
        assert_eq!(results.data[0].name, "Café Étoile");

        assert_eq!(repo.search_venues("ÉTOILE").await.unwrap().count, 1);
    }

    #[tokio::test]
    async fn test_failed_insert_leaves_no_row() {
        let repo = repo().await;

        sqlx::query(
            "CREATE TRIGGER reject_broken AFTER INSERT ON Venue WHEN NEW.name = 'Broken'
             BEGIN SELECT RAISE(ABORT, 'simulated failure'); END",
        )
        .execute(repo.pool())
        .await
        .unwrap();

        let result = repo.create_venue(&new_venue("Broken", "SF", "CA")).await;
        assert!(matches!(result, Err(Error::Database(_))));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Venue")
            .fetch_one(repo.pool())
            .await
            .unwrap();
        assert_eq!(count, 0);

        // Connection was released back to the single-connection pool
        repo.create_venue(&new_venue("Working", "SF", "CA")).await.unwrap();
    }
}
