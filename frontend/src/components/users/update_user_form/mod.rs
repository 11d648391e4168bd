//! Edit form for one record. Every field is shown, only email and mobile
//! number can be changed, and only those two are validated and submitted.

use yew::prelude::*;

use common::model::user::UserRecord;
use common::validation::{ContactForm, Field, ValidationErrors};

mod view;

#[derive(Properties, PartialEq, Clone)]
pub struct UpdateUserFormProps {
    pub record: UserRecord,
    #[prop_or_default]
    pub saving: bool,
    /// Receives the editable fields once they passed validation.
    pub on_submit: Callback<ContactForm>,
}

pub enum Msg {
    Input(Field, String),
    Submit,
}

pub struct UpdateUserForm {
    pub form: ContactForm,
    pub errors: ValidationErrors,
}

impl Component for UpdateUserForm {
    type Message = Msg;
    type Properties = UpdateUserFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let record = &ctx.props().record;
        Self {
            form: ContactForm {
                email: record.email_id.clone(),
                mobile_no: record.mobile_no.clone(),
            },
            errors: ValidationErrors::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(Field::Email, value) => self.form.email = value,
            Msg::Input(Field::MobileNo, value) => self.form.mobile_no = value,
            Msg::Input(..) => return false,
            Msg::Submit => {
                if ctx.props().saving {
                    return false;
                }
                match self.form.validate() {
                    Ok(_) => {
                        self.errors = ValidationErrors::default();
                        ctx.props().on_submit.emit(self.form.clone());
                    }
                    Err(errors) => self.errors = errors,
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
