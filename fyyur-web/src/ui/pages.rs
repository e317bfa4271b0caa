//! Home and error pages

use super::layout::page;
use crate::notice::Notice;

/// GET / (also rendered after every create submission)
pub fn home_page(notice: Option<&Notice>) -> String {
    page(
        "Home",
        notice,
        r#"<h1>Fyyur</h1>
        <p class="subtitle">Discover venues and artists, and book the next show.</p>
        <ul class="item-list">
            <li><a href="/venues/create">List a new venue</a></li>
            <li><a href="/artists/create">List a new artist</a></li>
            <li><a href="/shows/create">List a new show</a></li>
        </ul>"#,
    )
}

pub fn not_found_page() -> String {
    page(
        "Not Found",
        None,
        r#"<h1>404</h1><p class="subtitle">Page not found.</p><p><a href="/">Back home</a></p>"#,
    )
}

pub fn server_error_page() -> String {
    page(
        "Server Error",
        None,
        r#"<h1>500</h1><p class="subtitle">Something went wrong on our side.</p><p><a href="/">Back home</a></p>"#,
    )
}

/// Body of the 501 returned by the delete stubs
pub fn not_implemented_page() -> String {
    page(
        "Not Implemented",
        None,
        r#"<h1>501</h1><p class="subtitle">Deleting is not supported.</p><p><a href="/">Back home</a></p>"#,
    )
}
