//! fyyur-web library - Venue/artist/show booking directory
//!
//! Server-rendered pages over the shared repository. Exposed as a library so
//! integration tests can drive the router in-process.

use axum::Router;
use fyyur_common::Repository;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod forms;
pub mod notice;
pub mod ui;

pub use crate::error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Entity repository over the connection pool
    pub repo: Repository,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self {
            repo: Repository::new(db),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::page_routes())
        .merge(api::venue_routes())
        .merge(api::artist_routes())
        .merge(api::show_routes())
        .merge(api::health_routes())
        .merge(ui::static_routes())
        .fallback(api::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
