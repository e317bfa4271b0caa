//! Static asset handlers
//!
//! Embeds the stylesheet at compile time

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const MAIN_CSS: &str = include_str!("../../static/main.css");

/// GET /static/main.css
pub async fn serve_main_css() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "text/css"),
            ("cache-control", "public, max-age=3600"),
        ],
        MAIN_CSS,
    )
        .into_response()
}
