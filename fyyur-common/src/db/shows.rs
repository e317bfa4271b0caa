//! Show database operations
//!
//! A show copies the venue and artist name and image link at creation time.
//! Nothing keeps those copies in sync afterwards.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::info;

use super::artists::fetch_artist;
use super::venues::fetch_venue;
use super::{NewShow, Repository, Show};
use crate::{Error, Result};

const SHOW_COLUMNS: &str = "id, starttime, venue_id, artist_id, venue_name, artist_name, \
     artist_image_link, venue_image_link";

fn show_from_row(row: &SqliteRow) -> Show {
    Show {
        id: row.get("id"),
        start_time: row.get("starttime"),
        venue_id: row.get("venue_id"),
        artist_id: row.get("artist_id"),
        venue_name: row.get("venue_name"),
        artist_name: row.get("artist_name"),
        artist_image_link: row.get("artist_image_link"),
        venue_image_link: row.get("venue_image_link"),
    }
}

/// Shows matching a single-parameter filter, in natural storage order
pub(crate) async fn fetch_shows_where(pool: &SqlitePool, filter: &str, id: i64) -> Result<Vec<Show>> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM Show WHERE {} ORDER BY id",
        SHOW_COLUMNS, filter
    ))
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(show_from_row).collect())
}

impl Repository {
    /// Create a show linking an existing artist and venue
    ///
    /// Artist and venue are read inside the same transaction as the insert.
    /// A missing artist or venue fails with [`Error::NotFound`] and nothing
    /// is written.
    pub async fn create_show(&self, show: &NewShow) -> Result<Show> {
        let mut tx = self.pool().begin().await?;

        let artist = fetch_artist(&mut *tx, show.artist_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Artist {}", show.artist_id)))?;
        let venue = fetch_venue(&mut *tx, show.venue_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Venue {}", show.venue_id)))?;

        let show_id = sqlx::query(
            r#"
            INSERT INTO Show (
                starttime, venue_id, artist_id, venue_name, artist_name,
                artist_image_link, venue_image_link
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(show.start_time)
        .bind(venue.id)
        .bind(artist.id)
        .bind(&venue.name)
        .bind(&artist.name)
        .bind(&artist.image_link)
        .bind(&venue.image_link)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        tx.commit().await?;

        info!(
            show_id,
            artist_id = artist.id,
            venue_id = venue.id,
            "Created show '{}' at '{}'",
            artist.name,
            venue.name
        );

        Ok(Show {
            id: show_id,
            start_time: show.start_time,
            venue_id: venue.id,
            artist_id: artist.id,
            venue_name: venue.name,
            artist_name: artist.name,
            artist_image_link: artist.image_link,
            venue_image_link: venue.image_link,
        })
    }

    /// All shows in natural storage order
    pub async fn list_shows(&self) -> Result<Vec<Show>> {
        let rows = sqlx::query(&format!("SELECT {} FROM Show ORDER BY id", SHOW_COLUMNS))
            .fetch_all(self.pool())
            .await?;

        Ok(rows.iter().map(show_from_row).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{connect_in_memory, NewArtist, NewVenue};
    use chrono::NaiveDate;

    async fn seeded() -> (Repository, i64, i64) {
        let repo = Repository::new(connect_in_memory().await.unwrap());

        let venue = repo
            .create_venue(&NewVenue {
                name: "The Dueling Pianos Bar".to_string(),
                city: "New York".to_string(),
                state: "NY".to_string(),
                address: Some("335 Delancey Street".to_string()),
                image_link: Some("https://example.com/pianos.jpg".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let artist = repo
            .create_artist(&NewArtist {
                name: "Matt Quevedo".to_string(),
                city: "New York".to_string(),
                state: "NY".to_string(),
                image_link: Some("https://example.com/matt.jpg".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        (repo, artist.id, venue.id)
    }

    fn start() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2035, 4, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_show_denormalizes_names_and_images() {
        let (repo, artist_id, venue_id) = seeded().await;

        let created = repo
            .create_show(&NewShow {
                start_time: start(),
                artist_id,
                venue_id,
            })
            .await
            .expect("Failed to create show");

        assert_eq!(created.artist_name, "Matt Quevedo");
        assert_eq!(created.venue_name, "The Dueling Pianos Bar");
        assert_eq!(created.artist_image_link.as_deref(), Some("https://example.com/matt.jpg"));
        assert_eq!(created.venue_image_link.as_deref(), Some("https://example.com/pianos.jpg"));

        let listed = repo.list_shows().await.unwrap();
        assert_eq!(listed, vec![created.clone()]);

        assert_eq!(repo.shows_for_venue(venue_id).await.unwrap(), vec![created.clone()]);
        assert_eq!(repo.shows_for_artist(artist_id).await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_create_show_with_missing_venue_writes_nothing() {
        let (repo, artist_id, _) = seeded().await;

        let result = repo
            .create_show(&NewShow {
                start_time: start(),
                artist_id,
                venue_id: 999,
            })
            .await;

        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(repo.list_shows().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_show_with_missing_artist_writes_nothing() {
        let (repo, _, venue_id) = seeded().await;

        let result = repo
            .create_show(&NewShow {
                start_time: start(),
                artist_id: 999,
                venue_id,
            })
            .await;

        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(repo.list_shows().await.unwrap().is_empty());
    }
}
