//! Artist pages

use fyyur_common::time::{format_datetime, DateStyle};
use fyyur_common::view::{ArtistDetail, ArtistListItem, SearchResults, VenueAppearance};

use super::layout::{external_link, genre_tags, image, page};
use super::{esc, shows::search_results};

/// GET /artists
pub fn artists_page(artists: &[ArtistListItem]) -> String {
    let items: String = artists
        .iter()
        .map(|a| format!(r#"<li><a href="/artists/{}">{}</a></li>"#, a.id, esc(&a.name)))
        .collect();

    let listing = if items.is_empty() {
        r#"<p class="muted">No artists listed yet.</p>"#.to_string()
    } else {
        format!(r#"<ul class="item-list">{}</ul>"#, items)
    };

    page(
        "Artists",
        None,
        &format!(
            r#"<h1>Artists</h1><p><a href="/artists/create">List a new artist</a></p>{}"#,
            listing
        ),
    )
}

/// POST /artists/search
pub fn artist_search_page(search_term: &str, results: &SearchResults) -> String {
    page(
        "Artist Search",
        None,
        &search_results("artists", search_term, results),
    )
}

/// GET /artists/:artist_id
pub fn artist_detail_page(artist: &ArtistDetail) -> String {
    let mut body = format!(
        r#"<h1>{name}</h1><p class="muted">ID: {id}</p>{genres}<p>{city}, {state}</p>"#,
        name = esc(&artist.name),
        id = artist.id,
        genres = genre_tags(&artist.genres),
        city = esc(&artist.city),
        state = esc(&artist.state),
    );

    if let Some(phone) = &artist.phone {
        body.push_str(&format!("<p>{}</p>", esc(phone)));
    }
    body.push_str(&external_link("Website", artist.website.as_deref()));
    body.push_str(&external_link("Facebook", artist.facebook_link.as_deref()));

    if artist.seeking_venue {
        body.push_str(&format!(
            r#"<p class="seeking">Currently seeking performance venues: {}</p>"#,
            esc(artist.seeking_description.as_deref().unwrap_or_default())
        ));
    } else {
        body.push_str(r#"<p class="muted">Not currently seeking performance venues</p>"#);
    }

    body.push_str(&image(artist.image_link.as_deref(), &artist.name, "profile-image"));

    body.push_str(&format!(
        "<h2>{} Upcoming Shows</h2>{}",
        artist.shows.upcoming_shows_count,
        appearances(&artist.shows.upcoming_shows)
    ));
    body.push_str(&format!(
        "<h2>{} Past Shows</h2>{}",
        artist.shows.past_shows_count,
        appearances(&artist.shows.past_shows)
    ));
    body.push_str(&format!(
        r#"<p><a href="/artists/{}/edit">Edit artist</a></p>"#,
        artist.id
    ));

    page(&artist.name, None, &body)
}

fn appearances(shows: &[VenueAppearance]) -> String {
    shows
        .iter()
        .map(|show| {
            format!(
                r#"<div class="show-card">{}<div><a href="/venues/{}">{}</a><p class="muted">{}</p></div></div>"#,
                image(show.venue_image_link.as_deref(), &show.venue_name, ""),
                show.venue_id,
                esc(&show.venue_name),
                esc(&format_datetime(&show.start_time, DateStyle::Medium))
            )
        })
        .collect()
}
