use log::warn;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::document::{Document, DocumentKind};
use common::validation::Field;

use super::messages::Msg;
use super::state::UserFormComponent;
use crate::components::users::fields::{parse_input_date, read_document, today};

pub fn update(
    component: &mut UserFormComponent,
    ctx: &Context<UserFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Input(field, value) => {
            let form = &mut component.form;
            match field {
                Field::Name => form.name = value,
                Field::MobileNo => form.mobile_no = value,
                Field::Email => form.email = value,
                Field::Nationality => form.nationality = value,
                Field::DateOfBirth => form.date_of_birth = parse_input_date(&value),
                Field::PassportNo => form.passport_no = value,
                Field::PassportExpiryDate => form.passport_expiry_date = parse_input_date(&value),
                Field::Passport | Field::Photo => return false,
            }
            true
        }
        Msg::ChooseFile(kind, None) => {
            component.reads.clear(kind);
            set_document(component, kind, None);
            true
        }
        Msg::ChooseFile(kind, Some(file)) => {
            let generation = component.reads.begin(kind);
            let link = ctx.link().clone();
            spawn_local(async move {
                let document = match read_document(file).await {
                    Ok(document) => Some(document),
                    Err(err) => {
                        warn!("could not read the {kind} file: {err}");
                        None
                    }
                };
                link.send_message(Msg::FileLoaded(kind, generation, document));
            });
            true
        }
        Msg::FileLoaded(kind, generation, document) => {
            if !component.reads.finish(kind, generation) {
                return false;
            }
            set_document(component, kind, document);
            true
        }
        Msg::Submit => {
            if ctx.props().submitting || component.reads.is_loading() {
                return false;
            }
            match component.form.validate(today()) {
                Ok(_) => {
                    component.errors = Default::default();
                    ctx.props().on_submit.emit(component.form.clone());
                }
                Err(errors) => component.errors = errors,
            }
            true
        }
    }
}

fn set_document(
    component: &mut UserFormComponent,
    kind: DocumentKind,
    document: Option<Document>,
) {
    match kind {
        DocumentKind::Passport => component.form.passport = document,
        DocumentKind::Photo => component.form.photo = document,
    }
}
