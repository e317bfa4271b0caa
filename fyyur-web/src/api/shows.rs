//! Show handlers

use axum::{extract::State, response::Html, Form};
use fyyur_common::view::build_show_listing;
use tracing::error;

use crate::forms::{FormFields, ShowForm};
use crate::notice::Notice;
use crate::{ui, ApiResult, AppState};

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let shows = state.repo.list_shows().await?;
    Ok(Html(ui::shows::shows_page(&build_show_listing(&shows))))
}

/// GET /shows/create
pub async fn create_show_form() -> Html<String> {
    Html(ui::forms::show_form_page(&ShowForm::default()))
}

/// POST /shows/create
///
/// Unknown artist or venue ids fail like any other error: failure notice, nothing stored.
pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> Html<String> {
    let form = ShowForm::from_fields(&fields);

    let outcome = match form.validate() {
        Ok(new_show) => state.repo.create_show(&new_show).await,
        Err(e) => Err(e),
    };

    let notice = match outcome {
        Ok(_) => Notice::success("Show was successfully listed!"),
        Err(e) => {
            error!("Failed to list show: {}", e);
            Notice::failure("An error occurred. Show could not be listed.")
        }
    };

    Html(ui::pages::home_page(Some(&notice)))
}
