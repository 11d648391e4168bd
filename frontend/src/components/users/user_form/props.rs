use common::validation::UserForm;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UserFormProps {
    /// Receives the form once it passed validation.
    pub on_submit: Callback<UserForm>,
    /// Set by the parent while the create requests are in flight.
    #[prop_or_default]
    pub submitting: bool,
}
