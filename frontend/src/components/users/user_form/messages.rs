use common::model::document::{Document, DocumentKind};
use common::validation::Field;

pub enum Msg {
    /// Raw value of a text, select or date input.
    Input(Field, String),
    ChooseFile(DocumentKind, Option<web_sys::File>),
    /// Result of reading a picked file, tagged with the pick's generation.
    FileLoaded(DocumentKind, u64, Option<Document>),
    Submit,
}
