//! Venue and artist detail view models
//!
//! Show rows are split into past and upcoming by comparing each start time
//! with the current time. The boundary is inclusive: a show starting exactly
//! now counts as past.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::genres::parse_genres;
use crate::db::{Artist, Show, Venue};
use crate::time::format_start_time;

/// Past and upcoming shows with their counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowPartition<T> {
    pub past_shows: Vec<T>,
    pub upcoming_shows: Vec<T>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Show entry on a venue page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistAppearance {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// Show entry on an artist page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueAppearance {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueDetail {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    #[serde(flatten)]
    pub shows: ShowPartition<ArtistAppearance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetail {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    #[serde(flatten)]
    pub shows: ShowPartition<VenueAppearance>,
}

/// Split shows into past (`start_time <= now`) and upcoming, preserving
/// input order within each side
pub fn partition_shows<T, F>(shows: &[Show], now: NaiveDateTime, project: F) -> ShowPartition<T>
where
    F: Fn(&Show) -> T,
{
    let (past, upcoming): (Vec<&Show>, Vec<&Show>) =
        shows.iter().partition(|show| show.start_time <= now);

    let past_shows: Vec<T> = past.into_iter().map(&project).collect();
    let upcoming_shows: Vec<T> = upcoming.into_iter().map(&project).collect();

    ShowPartition {
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}

pub fn build_venue_detail(venue: &Venue, shows: &[Show], now: NaiveDateTime) -> VenueDetail {
    let shows = partition_shows(shows, now, |show| ArtistAppearance {
        artist_id: show.artist_id,
        artist_name: show.artist_name.clone(),
        artist_image_link: show.artist_image_link.clone(),
        start_time: format_start_time(&show.start_time),
    });

    VenueDetail {
        id: venue.id,
        name: venue.name.clone(),
        genres: parse_genres(&venue.genres),
        address: venue.address.clone(),
        city: venue.city.clone(),
        state: venue.state.clone(),
        phone: venue.phone.clone(),
        website: venue.website.clone(),
        facebook_link: venue.facebook_link.clone(),
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description.clone(),
        image_link: venue.image_link.clone(),
        shows,
    }
}

pub fn build_artist_detail(artist: &Artist, shows: &[Show], now: NaiveDateTime) -> ArtistDetail {
    let shows = partition_shows(shows, now, |show| VenueAppearance {
        venue_id: show.venue_id,
        venue_name: show.venue_name.clone(),
        venue_image_link: show.venue_image_link.clone(),
        start_time: format_start_time(&show.start_time),
    });

    ArtistDetail {
        id: artist.id,
        name: artist.name.clone(),
        genres: parse_genres(&artist.genres),
        city: artist.city.clone(),
        state: artist.state.clone(),
        phone: artist.phone.clone(),
        website: artist.website.clone(),
        facebook_link: artist.facebook_link.clone(),
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description.clone(),
        image_link: artist.image_link.clone(),
        shows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 6, 15)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap()
    }

    fn show(id: i64, start_time: NaiveDateTime) -> Show {
        Show {
            id,
            start_time,
            venue_id: 1,
            artist_id: 100 + id,
            venue_name: "The Musical Hop".to_string(),
            artist_name: format!("Artist {}", id),
            artist_image_link: None,
            venue_image_link: Some("https://example.com/hop.jpg".to_string()),
        }
    }

    fn ids<T>(partition: &ShowPartition<T>, id_of: fn(&T) -> i64) -> (Vec<i64>, Vec<i64>) {
        (
            partition.past_shows.iter().map(id_of).collect(),
            partition.upcoming_shows.iter().map(id_of).collect(),
        )
    }

    #[test]
    fn test_show_starting_now_is_past() {
        let partition = partition_shows(&[show(1, now())], now(), |s| s.id);
        assert_eq!(partition.past_shows, vec![1]);
        assert!(partition.upcoming_shows.is_empty());
    }

    #[test]
    fn test_one_second_either_side_of_now() {
        let shows = vec![
            show(1, now() - Duration::seconds(1)),
            show(2, now() + Duration::seconds(1)),
        ];

        let partition = partition_shows(&shows, now(), |s| s.id);
        assert_eq!(partition.past_shows, vec![1]);
        assert_eq!(partition.upcoming_shows, vec![2]);
        assert_eq!(partition.past_shows_count, 1);
        assert_eq!(partition.upcoming_shows_count, 1);
    }

    #[test]
    fn test_partition_preserves_input_order_and_counts() {
        let offsets = [-30, 5, -1, 0, 90, 2, -400];
        let shows: Vec<Show> = offsets
            .iter()
            .enumerate()
            .map(|(i, m)| show(i as i64, now() + Duration::minutes(*m)))
            .collect();

        let partition = partition_shows(&shows, now(), |s| s.id);
        assert_eq!(partition.past_shows, vec![0, 2, 3, 6]);
        assert_eq!(partition.upcoming_shows, vec![1, 4, 5]);
        assert_eq!(
            partition.past_shows_count + partition.upcoming_shows_count,
            shows.len()
        );
    }

    #[test]
    fn test_partition_empty() {
        let partition = partition_shows(&[], now(), |s| s.id);
        assert_eq!(partition.past_shows_count, 0);
        assert_eq!(partition.upcoming_shows_count, 0);
    }

    #[test]
    fn test_venue_detail() {
        let venue = Venue {
            id: 1,
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: Some("1015 Folsom Street".to_string()),
            phone: Some("123-123-1234".to_string()),
            image_link: None,
            facebook_link: None,
            genres: "[Jazz,Reggae,Swing]".to_string(),
            website: Some("https://www.themusicalhop.com".to_string()),
            seeking_talent: true,
            seeking_description: Some("Looking for a local artist".to_string()),
        };
        let shows = vec![
            show(1, now() - Duration::days(3)),
            show(2, now() + Duration::days(3)),
            show(3, now() + Duration::days(4)),
        ];

        let detail = build_venue_detail(&venue, &shows, now());
        assert_eq!(detail.genres, vec!["Jazz", "Reggae", "Swing"]);
        assert!(detail.seeking_talent);
        assert_eq!(
            ids(&detail.shows, |a: &ArtistAppearance| a.artist_id),
            (vec![101], vec![102, 103])
        );
        assert_eq!(detail.shows.past_shows[0].artist_name, "Artist 1");
        assert_eq!(detail.shows.past_shows[0].start_time, "2030-06-12 20:00:00");

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["past_shows_count"], 1);
        assert_eq!(json["upcoming_shows_count"], 2);
        assert_eq!(json["upcoming_shows"][0]["artist_id"], 102);
    }

    #[test]
    fn test_artist_detail() {
        let artist = Artist {
            id: 4,
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            genres: "[Rock n Roll]".to_string(),
            image_link: None,
            facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
            website: None,
            seeking_venue: false,
            seeking_description: None,
        };
        let shows = vec![show(1, now() + Duration::hours(1))];

        let detail = build_artist_detail(&artist, &shows, now());
        assert_eq!(detail.genres, vec!["Rock n Roll"]);
        assert_eq!(detail.shows.past_shows_count, 0);
        assert_eq!(detail.shows.upcoming_shows_count, 1);

        let upcoming = &detail.shows.upcoming_shows[0];
        assert_eq!(upcoming.venue_id, 1);
        assert_eq!(upcoming.venue_name, "The Musical Hop");
        assert_eq!(
            upcoming.venue_image_link.as_deref(),
            Some("https://example.com/hop.jpg")
        );
    }
}
