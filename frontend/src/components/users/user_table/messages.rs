use common::api::ApiError;
use common::model::user::{UserId, UserRecord};
use common::requests::UpdateContactRequest;
use common::validation::ContactForm;
use common::workflow::EditUserError;

pub enum Msg {
    Fetch,
    Fetched(Result<Vec<UserRecord>, ApiError>),
    /// Opens the edit dialog for a row, or closes it with `None`.
    SetEditing(Option<UserId>),
    SaveContact(UserId, ContactForm),
    ContactSaved(UserId, Result<UpdateContactRequest, EditUserError>),
    /// Opens the delete confirmation for a row, or cancels it with `None`.
    AskDelete(Option<UserId>),
    ConfirmDelete,
    Deleted(UserId, Result<(), ApiError>),
}
