//! Listing and search view models

use serde::Serialize;
use std::collections::HashMap;

use crate::db::{Artist, Named, Show, Venue};
use crate::time::format_start_time;

/// `{id, name, num_upcoming_shows}` entry used by area listings and search
///
/// `num_upcoming_shows` is a placeholder and always 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

impl EntitySummary {
    pub fn from_record<T: Named>(record: &T) -> Self {
        Self {
            id: record.id(),
            name: record.name().to_string(),
            num_upcoming_shows: 0,
        }
    }
}

/// Venues sharing one exact (city, state) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<EntitySummary>,
}

/// Name search response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<EntitySummary>,
}

impl SearchResults {
    pub fn from_records<T: Named>(records: &[T]) -> Self {
        let data: Vec<EntitySummary> = records.iter().map(EntitySummary::from_record).collect();
        Self {
            count: data.len(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistListItem {
    pub id: i64,
    pub name: String,
}

/// Row of the flat show listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListItem {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// Group venues by exact (city, state)
///
/// Groups appear in the order their first venue appears; venues keep their
/// input order inside a group. Matching is case-sensitive.
pub fn group_venues_by_location(venues: &[Venue]) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for venue in venues {
        let key = (venue.city.as_str(), venue.state.as_str());
        let summary = EntitySummary::from_record(venue);

        match index.get(&key) {
            Some(&i) => areas[i].venues.push(summary),
            None => {
                index.insert(key, areas.len());
                areas.push(VenueArea {
                    city: venue.city.clone(),
                    state: venue.state.clone(),
                    venues: vec![summary],
                });
            }
        }
    }

    areas
}

pub fn build_artist_listing(artists: &[Artist]) -> Vec<ArtistListItem> {
    artists
        .iter()
        .map(|artist| ArtistListItem {
            id: artist.id,
            name: artist.name.clone(),
        })
        .collect()
}

pub fn build_show_listing(shows: &[Show]) -> Vec<ShowListItem> {
    shows
        .iter()
        .map(|show| ShowListItem {
            venue_id: show.venue_id,
            venue_name: show.venue_name.clone(),
            artist_id: show.artist_id,
            artist_name: show.artist_name.clone(),
            artist_image_link: show.artist_image_link.clone(),
            start_time: format_start_time(&show.start_time),
        })
        .collect()
}
