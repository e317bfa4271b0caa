//! Venue handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use fyyur_common::time::now;
use fyyur_common::view::{build_venue_detail, group_venues_by_location};
use tracing::{error, warn};

use super::extract::EntityId;
use crate::forms::{FormFields, SearchForm, VenueForm};
use crate::notice::Notice;
use crate::ui::{self, forms::FormTarget};
use crate::{ApiError, ApiResult, AppState};

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let venues = state.repo.list_venues().await?;
    Ok(Html(ui::venues::venues_page(&group_venues_by_location(&venues))))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> ApiResult<Html<String>> {
    let search = SearchForm::from_fields(&fields);
    let results = state.repo.search_venues(&search.search_term).await?;
    Ok(Html(ui::venues::venue_search_page(&search.search_term, &results)))
}

/// GET /venues/:venue_id
pub async fn show_venue(
    State(state): State<AppState>,
    EntityId(venue_id): EntityId,
) -> ApiResult<Html<String>> {
    let venue = state
        .repo
        .find_venue(venue_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("venue {}", venue_id)))?;
    let shows = state.repo.shows_for_venue(venue_id).await?;

    let detail = build_venue_detail(&venue, &shows, now());
    Ok(Html(ui::venues::venue_detail_page(&detail)))
}

/// GET /venues/create
pub async fn create_venue_form() -> Html<String> {
    Html(ui::forms::venue_form_page(&VenueForm::default(), FormTarget::Create))
}

/// POST /venues/create
///
/// Always answers with the home page; the notice reports the outcome.
pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> Html<String> {
    let form = VenueForm::from_fields(&fields);

    let outcome = match form.validate() {
        Ok(new_venue) => state.repo.create_venue(&new_venue).await,
        Err(e) => Err(e),
    };

    let notice = match outcome {
        Ok(venue) => Notice::listing("Venue", &venue.name, true),
        Err(e) => {
            error!("Failed to list venue '{}': {}", form.name, e);
            Notice::listing("Venue", &form.name, false)
        }
    };

    Html(ui::pages::home_page(Some(&notice)))
}

/// GET /venues/:venue_id/edit
pub async fn edit_venue(
    State(state): State<AppState>,
    EntityId(venue_id): EntityId,
) -> ApiResult<Html<String>> {
    let venue = state
        .repo
        .find_venue(venue_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("venue {}", venue_id)))?;

    Ok(Html(ui::forms::venue_form_page(
        &VenueForm::from(&venue),
        FormTarget::Edit(venue_id),
    )))
}

/// POST /venues/:venue_id/edit
///
/// Edits are not persisted; redirects back to the detail page.
pub async fn edit_venue_submission(EntityId(venue_id): EntityId) -> Redirect {
    Redirect::to(&format!("/venues/{}", venue_id))
}

/// DELETE /venues/:venue_id
pub async fn delete_venue(EntityId(venue_id): EntityId) -> impl IntoResponse {
    warn!("Delete requested for venue {}; deleting is not supported", venue_id);
    (
        StatusCode::NOT_IMPLEMENTED,
        Html(ui::pages::not_implemented_page()),
    )
}
