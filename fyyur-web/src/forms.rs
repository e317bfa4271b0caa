//! Typed form input
//!
//! Submitted bodies are decoded into [`FormFields`] (ordered key/value pairs,
//! keys may repeat) and then into one typed form per page. Each form
//! validates into the matching `New*` model; every failure is
//! [`Error::Validation`].

use fyyur_common::db::{Artist, NewArtist, NewShow, NewVenue, Venue};
use fyyur_common::time::{format_start_time, now, parse_start_time};
use fyyur_common::view::parse_genres;
use fyyur_common::{Error, Result};
use serde::Deserialize;

/// Genres offered by the venue and artist forms
pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Raw urlencoded form body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    /// First value for `key`, untrimmed
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Trimmed value for `key`, empty when absent
    pub fn text(&self, key: &str) -> String {
        self.first(key).map(str::trim).unwrap_or_default().to_string()
    }

    /// Every non-empty value submitted under `key`, in submission order
    pub fn all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// Checkbox semantics: present with a truthy value
    pub fn flag(&self, key: &str) -> bool {
        matches!(
            self.first(key).map(|v| v.trim().to_ascii_lowercase()).as_deref(),
            Some("y" | "yes" | "on" | "true" | "1")
        )
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Search box (`search_term`), empty when absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub search_term: String,
}

impl SearchForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            search_term: fields.text("search_term"),
        }
    }
}

/// Venue create/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub image_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            address: fields.text("address"),
            phone: fields.text("phone"),
            genres: fields.all("genres"),
            facebook_link: fields.text("facebook_link"),
            image_link: fields.text("image_link"),
            website: fields.text("website"),
            seeking_talent: fields.flag("seeking_talent"),
            seeking_description: fields.text("seeking_description"),
        }
    }

    pub fn validate(&self) -> Result<NewVenue> {
        Ok(NewVenue {
            name: required("name", &self.name)?,
            city: required("city", &self.city)?,
            state: required("state", &self.state)?,
            address: optional(&self.address),
            phone: optional(&self.phone),
            image_link: link("image_link", &self.image_link)?,
            facebook_link: link("facebook_link", &self.facebook_link)?,
            genres: genres(&self.genres)?,
            website: link("website", &self.website)?,
            seeking_talent: self.seeking_talent,
            seeking_description: optional(&self.seeking_description),
        })
    }
}

impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone().unwrap_or_default(),
            phone: venue.phone.clone().unwrap_or_default(),
            genres: parse_genres(&venue.genres),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            website: venue.website.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }
}

/// Artist create/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub image_link: String,
    pub website: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            phone: fields.text("phone"),
            genres: fields.all("genres"),
            facebook_link: fields.text("facebook_link"),
            image_link: fields.text("image_link"),
            website: fields.text("website"),
            seeking_venue: fields.flag("seeking_venue"),
            seeking_description: fields.text("seeking_description"),
        }
    }

    pub fn validate(&self) -> Result<NewArtist> {
        Ok(NewArtist {
            name: required("name", &self.name)?,
            city: required("city", &self.city)?,
            state: required("state", &self.state)?,
            phone: optional(&self.phone),
            genres: genres(&self.genres)?,
            image_link: link("image_link", &self.image_link)?,
            facebook_link: link("facebook_link", &self.facebook_link)?,
            website: link("website", &self.website)?,
            seeking_venue: self.seeking_venue,
            seeking_description: optional(&self.seeking_description),
        })
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            genres: parse_genres(&artist.genres),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            website: artist.website.clone().unwrap_or_default(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }
}

/// Show create form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl Default for ShowForm {
    /// Start time defaults to the current time
    fn default() -> Self {
        Self {
            artist_id: String::new(),
            venue_id: String::new(),
            start_time: format_start_time(&now()),
        }
    }
}

impl ShowForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            artist_id: fields.text("artist_id"),
            venue_id: fields.text("venue_id"),
            start_time: fields.text("start_time"),
        }
    }

    pub fn validate(&self) -> Result<NewShow> {
        Ok(NewShow {
            artist_id: id("artist_id", &self.artist_id)?,
            venue_id: id("venue_id", &self.venue_id)?,
            start_time: parse_start_time(&self.start_time).ok_or_else(|| {
                Error::Validation(format!("start_time is not a valid date: '{}'", self.start_time))
            })?,
        })
    }
}

fn required(field: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(Error::Validation(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn link(field: &str, value: &str) -> Result<Option<String>> {
    match optional(value) {
        Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => Err(
            Error::Validation(format!("{} must be an http(s) URL: '{}'", field, url)),
        ),
        other => Ok(other),
    }
}

fn genres(values: &[String]) -> Result<Vec<String>> {
    for genre in values {
        if !GENRE_CHOICES.contains(&genre.as_str()) {
            return Err(Error::Validation(format!("Unknown genre: '{}'", genre)));
        }
    }
    Ok(values.to_vec())
}

fn id(field: &str, value: &str) -> Result<i64> {
    value
        .parse::<i64>()
        .map_err(|_| Error::Validation(format!("{} must be a number: '{}'", field, value)))
}
