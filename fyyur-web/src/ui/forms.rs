//! Create/edit form pages

use super::layout::page;
use super::{attr, esc};
use crate::forms::{ArtistForm, ShowForm, VenueForm, GENRE_CHOICES};

/// Where a venue/artist form submits to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Create,
    Edit(i64),
}

impl FormTarget {
    /// Submission path under `collection` ("venues" or "artists")
    pub fn action(&self, collection: &str) -> String {
        match self {
            FormTarget::Create => format!("/{}/create", collection),
            FormTarget::Edit(id) => format!("/{}/{}/edit", collection, id),
        }
    }

    fn heading(&self, noun: &str) -> String {
        match self {
            FormTarget::Create => format!("List a new {}", noun),
            FormTarget::Edit(_) => format!("Edit {}", noun),
        }
    }
}

/// GET /venues/create, GET /venues/:venue_id/edit
pub fn venue_form_page(form: &VenueForm, target: FormTarget) -> String {
    let fields = [
        text_input("name", "Name", &form.name, "text"),
        text_input("city", "City", &form.city, "text"),
        text_input("state", "State", &form.state, "text"),
        text_input("address", "Address", &form.address, "text"),
        text_input("phone", "Phone", &form.phone, "tel"),
        genre_select(&form.genres),
        text_input("facebook_link", "Facebook link", &form.facebook_link, "url"),
        text_input("image_link", "Image link", &form.image_link, "url"),
        text_input("website", "Website", &form.website, "url"),
        checkbox("seeking_talent", "Seeking talent", form.seeking_talent),
        text_area("seeking_description", "Seeking description", &form.seeking_description),
    ]
    .concat();

    let heading = target.heading("venue");
    page(&heading, None, &form_body(&heading, &target.action("venues"), &fields))
}

/// GET /artists/create, GET /artists/:artist_id/edit
pub fn artist_form_page(form: &ArtistForm, target: FormTarget) -> String {
    let fields = [
        text_input("name", "Name", &form.name, "text"),
        text_input("city", "City", &form.city, "text"),
        text_input("state", "State", &form.state, "text"),
        text_input("phone", "Phone", &form.phone, "tel"),
        genre_select(&form.genres),
        text_input("facebook_link", "Facebook link", &form.facebook_link, "url"),
        text_input("image_link", "Image link", &form.image_link, "url"),
        text_input("website", "Website", &form.website, "url"),
        checkbox("seeking_venue", "Seeking venue", form.seeking_venue),
        text_area("seeking_description", "Seeking description", &form.seeking_description),
    ]
    .concat();

    let heading = target.heading("artist");
    page(&heading, None, &form_body(&heading, &target.action("artists"), &fields))
}

/// GET /shows/create
pub fn show_form_page(form: &ShowForm) -> String {
    let fields = [
        text_input("artist_id", "Artist ID", &form.artist_id, "text"),
        text_input("venue_id", "Venue ID", &form.venue_id, "text"),
        text_input("start_time", "Start time", &form.start_time, "text"),
    ]
    .concat();

    page(
        "List a new show",
        None,
        &form_body("List a new show", "/shows/create", &fields),
    )
}

fn form_body(heading: &str, action: &str, fields: &str) -> String {
    format!(
        r#"<h1>{}</h1><form class="entity-form" method="post" action="{}">{}<button type="submit">Submit</button></form>"#,
        esc(heading),
        action,
        fields
    )
}

fn text_input(name: &str, label: &str, value: &str, kind: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label><input type="{kind}" id="{name}" name="{name}" value="{value}">"#,
        name = name,
        label = label,
        kind = kind,
        value = attr(value),
    )
}

fn text_area(name: &str, label: &str, value: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label><textarea id="{name}" name="{name}">{value}</textarea>"#,
        name = name,
        label = label,
        value = esc(value),
    )
}

fn checkbox(name: &str, label: &str, checked: bool) -> String {
    format!(
        r#"<label><input type="checkbox" name="{}" value="y"{}> {}</label>"#,
        name,
        if checked { " checked" } else { "" },
        label
    )
}

fn genre_select(selected: &[String]) -> String {
    let options: String = GENRE_CHOICES
        .iter()
        .map(|genre| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                attr(genre),
                if selected.iter().any(|s| s == genre) { " selected" } else { "" },
                esc(genre)
            )
        })
        .collect();
    format!(
        r#"<label for="genres">Genres</label><select id="genres" name="genres" multiple>{}</select>"#,
        options
    )
}
