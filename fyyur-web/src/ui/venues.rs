//! Venue pages

use fyyur_common::time::{format_datetime, DateStyle};
use fyyur_common::view::{ArtistAppearance, SearchResults, VenueArea, VenueDetail};

use super::layout::{external_link, genre_tags, image, page};
use super::{esc, shows::search_results};

/// GET /venues
pub fn venues_page(areas: &[VenueArea]) -> String {
    let mut body = String::from(r#"<h1>Venues</h1><p><a href="/venues/create">List a new venue</a></p>"#);

    if areas.is_empty() {
        body.push_str(r#"<p class="muted">No venues listed yet.</p>"#);
    }

    for area in areas {
        body.push_str(&format!(
            r#"<section class="area"><h2>{}, {}</h2><ul class="item-list">"#,
            esc(&area.city),
            esc(&area.state)
        ));
        for venue in &area.venues {
            body.push_str(&format!(
                r#"<li><a href="/venues/{}">{}</a> <span class="muted">{} upcoming shows</span></li>"#,
                venue.id,
                esc(&venue.name),
                venue.num_upcoming_shows
            ));
        }
        body.push_str("</ul></section>");
    }

    page("Venues", None, &body)
}

/// POST /venues/search
pub fn venue_search_page(search_term: &str, results: &SearchResults) -> String {
    page(
        "Venue Search",
        None,
        &search_results("venues", search_term, results),
    )
}

/// GET /venues/:venue_id
pub fn venue_detail_page(venue: &VenueDetail) -> String {
    let mut body = format!(
        r#"<h1>{name}</h1><p class="muted">ID: {id}</p>{genres}"#,
        name = esc(&venue.name),
        id = venue.id,
        genres = genre_tags(&venue.genres),
    );

    if let Some(address) = &venue.address {
        body.push_str(&format!("<p>{}</p>", esc(address)));
    }
    body.push_str(&format!("<p>{}, {}</p>", esc(&venue.city), esc(&venue.state)));

    if let Some(phone) = &venue.phone {
        body.push_str(&format!("<p>{}</p>", esc(phone)));
    }
    body.push_str(&external_link("Website", venue.website.as_deref()));
    body.push_str(&external_link("Facebook", venue.facebook_link.as_deref()));

    if venue.seeking_talent {
        body.push_str(&format!(
            r#"<p class="seeking">Currently seeking talent: {}</p>"#,
            esc(venue.seeking_description.as_deref().unwrap_or_default())
        ));
    } else {
        body.push_str(r#"<p class="muted">Not currently seeking talent</p>"#);
    }

    body.push_str(&image(venue.image_link.as_deref(), &venue.name, "profile-image"));

    body.push_str(&format!(
        "<h2>{} Upcoming Shows</h2>{}",
        venue.shows.upcoming_shows_count,
        appearances(&venue.shows.upcoming_shows)
    ));
    body.push_str(&format!(
        "<h2>{} Past Shows</h2>{}",
        venue.shows.past_shows_count,
        appearances(&venue.shows.past_shows)
    ));
    body.push_str(&format!(
        r#"<p><a href="/venues/{}/edit">Edit venue</a></p>"#,
        venue.id
    ));

    page(&venue.name, None, &body)
}

fn appearances(shows: &[ArtistAppearance]) -> String {
    shows
        .iter()
        .map(|show| {
            format!(
                r#"<div class="show-card">{}<div><a href="/artists/{}">{}</a><p class="muted">{}</p></div></div>"#,
                image(show.artist_image_link.as_deref(), &show.artist_name, ""),
                show.artist_id,
                esc(&show.artist_name),
                esc(&format_datetime(&show.start_time, DateStyle::Medium))
            )
        })
        .collect()
}
