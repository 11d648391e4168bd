//! Helpers shared by the create and edit forms: reading input events, loading
//! picked files, and rendering validation hints.

use chrono::NaiveDate;
use gloo_file::futures::read_as_bytes;
use gloo_file::FileReadError;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use common::model::document::Document;
use common::validation::{Field, ValidationErrors};

/// Layout of `<input type="date">` values.
const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn input_value<E: TargetCast>(e: &E) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn select_value<E: TargetCast>(e: &E) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, INPUT_DATE_FORMAT).ok()
}

pub fn format_input_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(INPUT_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// First file of a file input, if one was picked.
pub fn chosen_file<E: TargetCast>(e: &E) -> Option<web_sys::File> {
    e.target_unchecked_into::<HtmlInputElement>()
        .files()
        .and_then(|files| files.get(0))
}

pub async fn read_document(file: web_sys::File) -> Result<Document, FileReadError> {
    let file = gloo_file::File::from(file);
    let bytes = read_as_bytes(&file).await?;
    Ok(Document::new(file.name(), file.raw_mime_type(), bytes))
}

/// Validation message rendered under an input, or nothing.
pub fn hint(errors: &ValidationErrors, field: Field) -> Html {
    match errors.message_for(field) {
        Some(message) => html! { <p class="form-message">{ message }</p> },
        None => html! {},
    }
}
