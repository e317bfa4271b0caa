//! Artist handlers

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use fyyur_common::time::now;
use fyyur_common::view::{build_artist_detail, build_artist_listing};
use tracing::error;

use super::extract::EntityId;
use crate::forms::{ArtistForm, FormFields, SearchForm};
use crate::notice::Notice;
use crate::ui::{self, forms::FormTarget};
use crate::{ApiError, ApiResult, AppState};

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let artists = state.repo.list_artists().await?;
    Ok(Html(ui::artists::artists_page(&build_artist_listing(&artists))))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> ApiResult<Html<String>> {
    let search = SearchForm::from_fields(&fields);
    let results = state.repo.search_artists(&search.search_term).await?;
    Ok(Html(ui::artists::artist_search_page(&search.search_term, &results)))
}

/// GET /artists/:artist_id
pub async fn show_artist(
    State(state): State<AppState>,
    EntityId(artist_id): EntityId,
) -> ApiResult<Html<String>> {
    let artist = state
        .repo
        .find_artist(artist_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("artist {}", artist_id)))?;
    let shows = state.repo.shows_for_artist(artist_id).await?;

    let detail = build_artist_detail(&artist, &shows, now());
    Ok(Html(ui::artists::artist_detail_page(&detail)))
}

/// GET /artists/create
pub async fn create_artist_form() -> Html<String> {
    Html(ui::forms::artist_form_page(&ArtistForm::default(), FormTarget::Create))
}

/// POST /artists/create
pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> Html<String> {
    let form = ArtistForm::from_fields(&fields);

    let outcome = match form.validate() {
        Ok(new_artist) => state.repo.create_artist(&new_artist).await,
        Err(e) => Err(e),
    };

    let notice = match outcome {
        Ok(artist) => Notice::listing("Artist", &artist.name, true),
        Err(e) => {
            error!("Failed to list artist '{}': {}", form.name, e);
            Notice::listing("Artist", &form.name, false)
        }
    };

    Html(ui::pages::home_page(Some(&notice)))
}

/// GET /artists/:artist_id/edit
pub async fn edit_artist(
    State(state): State<AppState>,
    EntityId(artist_id): EntityId,
) -> ApiResult<Html<String>> {
    let artist = state
        .repo
        .find_artist(artist_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("artist {}", artist_id)))?;

    Ok(Html(ui::forms::artist_form_page(
        &ArtistForm::from(&artist),
        FormTarget::Edit(artist_id),
    )))
}

/// POST /artists/:artist_id/edit
pub async fn edit_artist_submission(EntityId(artist_id): EntityId) -> Redirect {
    Redirect::to(&format!("/artists/{}", artist_id))
}
