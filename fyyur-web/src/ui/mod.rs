//! UI rendering - server-side HTML pages
//!
//! # Structure
//! - **Layout** (`layout`): page shell, navigation and notice banner
//! - **Pages** (`pages`): home and error pages
//! - **Venues / Artists / Shows**: listing, search and detail pages
//! - **Forms** (`forms`): create and edit forms
//! - **Static Assets** (`static_assets`): embedded stylesheet
//!
//! Renderers are plain functions returning `String`; handlers in
//! [`crate::api`] wrap them in `Html`.

use axum::{routing::get, Router};

use crate::AppState;

pub mod artists;
pub mod forms;
mod layout;
pub mod pages;
pub mod shows;
mod static_assets;
pub mod venues;

/// Escape text for element content
pub(crate) fn esc(text: &str) -> String {
    htmlescape::encode_minimal(text)
}

/// Escape text for a quoted attribute value
pub(crate) fn attr(text: &str) -> String {
    htmlescape::encode_attribute(text)
}

/// Build static asset routes
pub fn static_routes() -> Router<AppState> {
    Router::new().route("/static/main.css", get(static_assets::serve_main_css))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaping() {
        assert_eq!(esc("<b>R&B</b>"), "&lt;b&gt;R&amp;B&lt;/b&gt;");
        assert!(!attr("\"onload=x").contains('"'));
    }
}
