//! Artist database operations

use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, Row, Sqlite};
use tracing::{debug, info};

use super::{Artist, NameMatcher, NewArtist, Repository, Show};
use crate::view::{encode_genres, SearchResults};
use crate::{Error, Result};

macro_rules! artist_columns {
    () => {
        "id, name, city, state, phone, genres, image_link, facebook_link, \
         website, seeking_venue, seeking_description"
    };
}

fn artist_from_row(row: &SqliteRow) -> Artist {
    Artist {
        id: row.get("id"),
        name: row.get("name"),
        city: row.get("city"),
        state: row.get("state"),
        phone: row.get("phone"),
        genres: row.get("genres"),
        image_link: row.get("image_link"),
        facebook_link: row.get("facebook_link"),
        website: row.get("website"),
        seeking_venue: row.get("seeking_venue"),
        seeking_description: row.get("seeking_description"),
    }
}

/// Load an artist through any executor (pool or open transaction)
pub(crate) async fn fetch_artist<'e, E>(executor: E, artist_id: i64) -> Result<Option<Artist>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query(concat!("SELECT ", artist_columns!(), " FROM Artist WHERE id = ?"))
        .bind(artist_id)
        .fetch_optional(executor)
        .await?;

    Ok(row.as_ref().map(artist_from_row))
}

impl Repository {
    /// Insert an artist in a scoped transaction and return the stored row
    pub async fn create_artist(&self, artist: &NewArtist) -> Result<Artist> {
        let mut tx = self.pool().begin().await?;

        let artist_id = sqlx::query(
            r#"
            INSERT INTO Artist (
                name, city, state, phone, genres, image_link, facebook_link,
                website, seeking_venue, seeking_description
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&artist.name)
        .bind(&artist.city)
        .bind(&artist.state)
        .bind(&artist.phone)
        .bind(encode_genres(&artist.genres))
        .bind(&artist.image_link)
        .bind(&artist.facebook_link)
        .bind(&artist.website)
        .bind(artist.seeking_venue)
        .bind(&artist.seeking_description)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let created = fetch_artist(&mut *tx, artist_id)
            .await?
            .ok_or_else(|| Error::Internal(format!("Artist {} vanished after insert", artist_id)))?;

        tx.commit().await?;

        info!(artist_id, "Created artist '{}'", created.name);
        Ok(created)
    }

    /// Look up an artist by id
    pub async fn find_artist(&self, artist_id: i64) -> Result<Option<Artist>> {
        fetch_artist(self.pool(), artist_id).await
    }

    /// All artists in natural storage order
    pub async fn list_artists(&self) -> Result<Vec<Artist>> {
        let rows = sqlx::query(concat!("SELECT ", artist_columns!(), " FROM Artist ORDER BY id"))
            .fetch_all(self.pool())
            .await?;

        Ok(rows.iter().map(artist_from_row).collect())
    }

    /// Case-insensitive substring search over artist names
    pub async fn search_artists(&self, term: &str) -> Result<SearchResults> {
        let matcher = NameMatcher::new(term);
        let artists: Vec<Artist> = self
            .list_artists()
            .await?
            .into_iter()
            .filter(|artist| matcher.matches(&artist.name))
            .collect();
        debug!("Artist search '{}' matched {} rows", term, artists.len());

        Ok(SearchResults::from_records(&artists))
    }

    /// Shows an artist plays, in natural storage order
    pub async fn shows_for_artist(&self, artist_id: i64) -> Result<Vec<Show>> {
        super::shows::fetch_shows_where(self.pool(), "artist_id = ?", artist_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_in_memory;

    fn new_artist(name: &str) -> NewArtist {
        NewArtist {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: Some("326-123-5000".to_string()),
            genres: vec!["Rock n Roll".to_string()],
            seeking_venue: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_save_and_load_artist() {
        let repo = Repository::new(connect_in_memory().await.unwrap());

        let created = repo
            .create_artist(&new_artist("Guns N Petals"))
            .await
            .expect("Failed to create artist");

        let loaded = repo
            .find_artist(created.id)
            .await
            .expect("Failed to load artist")
            .expect("Artist not found");

        assert_eq!(loaded.name, "Guns N Petals");
        assert_eq!(loaded.genres, "[Rock n Roll]");
        assert_eq!(loaded.phone.as_deref(), Some("326-123-5000"));
        assert!(loaded.seeking_venue);
    }

    #[tokio::test]
    async fn test_search_artists() {
        let repo = Repository::new(connect_in_memory().await.unwrap());
        repo.create_artist(&new_artist("Guns N Petals")).await.unwrap();
        repo.create_artist(&new_artist("Matt Quevedo")).await.unwrap();
        repo.create_artist(&new_artist("The Wild Sax Band")).await.unwrap();

        let results = repo.search_artists("A").await.unwrap();
        assert_eq!(results.count, 3);

        let results = repo.search_artists("band").await.unwrap();
        assert_eq!(results.count, 1);
        assert_eq!(results.data[0].name, "The Wild Sax Band");
    }

    #[tokio::test]
    async fn test_list_artists_empty() {
        let repo = Repository::new(connect_in_memory().await.unwrap());
        assert!(repo.list_artists().await.unwrap().is_empty());
    }
}
