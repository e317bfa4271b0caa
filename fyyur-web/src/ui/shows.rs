//! Show listing and shared search results

use fyyur_common::time::{format_datetime, DateStyle};
use fyyur_common::view::{SearchResults, ShowListItem};

use super::esc;
use super::layout::{image, page};

/// GET /shows
pub fn shows_page(shows: &[ShowListItem]) -> String {
    let mut body = String::from(r#"<h1>Shows</h1><p><a href="/shows/create">List a new show</a></p>"#);

    if shows.is_empty() {
        body.push_str(r#"<p class="muted">No shows listed yet.</p>"#);
    }

    for show in shows {
        body.push_str(&format!(
            r#"<div class="show-card">{img}<div><p class="muted">{when}</p><p><a href="/artists/{artist_id}">{artist}</a> playing at <a href="/venues/{venue_id}">{venue}</a></p></div></div>"#,
            img = image(show.artist_image_link.as_deref(), &show.artist_name, ""),
            when = esc(&format_datetime(&show.start_time, DateStyle::Full)),
            artist_id = show.artist_id,
            artist = esc(&show.artist_name),
            venue_id = show.venue_id,
            venue = esc(&show.venue_name),
        ));
    }

    page("Shows", None, &body)
}

/// Search results body; `collection` is the route prefix ("venues" or "artists")
pub(super) fn search_results(collection: &str, search_term: &str, results: &SearchResults) -> String {
    let items: String = results
        .data
        .iter()
        .map(|r| {
            format!(
                r#"<li><a href="/{}/{}">{}</a></li>"#,
                collection,
                r.id,
                esc(&r.name)
            )
        })
        .collect();

    format!(
        r#"<h1>Number of search results for "{}": {}</h1><ul class="item-list">{}</ul>"#,
        esc(search_term),
        results.count,
        items
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fyyur_common::view::EntitySummary;

    #[test]
    fn test_search_results_header_and_links() {
        let results = SearchResults {
            count: 1,
            data: vec![EntitySummary {
                id: 1,
                name: "The Hop".to_string(),
                num_upcoming_shows: 0,
            }],
        };
        let html = search_results("venues", "hop", &results);
        assert!(html.contains(r#"Number of search results for "hop": 1"#));
        assert!(html.contains(r#"<a href="/venues/1">The Hop</a>"#));
    }

    #[test]
    fn test_shows_page_uses_full_dates() {
        let shows = vec![ShowListItem {
            venue_id: 1,
            venue_name: "The Hop".to_string(),
            artist_id: 4,
            artist_name: "Guns N Petals".to_string(),
            artist_image_link: None,
            start_time: "2035-05-21 21:30:00".to_string(),
        }];
        let html = shows_page(&shows);
        assert!(html.contains("Monday May, 21, 2035 at 9:30PM"));
        assert!(html.contains("Guns N Petals"));
    }
}
