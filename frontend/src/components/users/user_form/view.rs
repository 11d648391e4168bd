use yew::html::Scope;
use yew::prelude::*;

use common::model::country::COUNTRIES;
use common::model::document::DocumentKind;
use common::validation::{earliest_date, Field};

use super::messages::Msg;
use super::state::UserFormComponent;
use crate::components::users::fields::{
    chosen_file, format_input_date, hint, input_value, select_value, today,
};

pub fn view(component: &UserFormComponent, ctx: &Context<UserFormComponent>) -> Html {
    let link = ctx.link();
    let form = &component.form;
    let busy = ctx.props().submitting || component.reads.is_loading();
    let min_date = format_input_date(Some(earliest_date()));
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="user-form" {onsubmit} novalidate=true>
            { text_input(component, link, Field::Name, "text", "Name", &form.name) }
            { text_input(component, link, Field::Email, "email", "Email", &form.email) }
            { text_input(component, link, Field::MobileNo, "tel", "Mobile number", &form.mobile_no) }

            <div class="form-item">
                <label>{"Nationality "}</label>
                <select onchange={link.callback(|e: Event| Msg::Input(Field::Nationality, select_value(&e)))}>
                    { for COUNTRIES.iter().map(|country| html! {
                        <option value={country.code} selected={country.code == form.nationality}>
                            { country.label }
                        </option>
                    }) }
                </select>
                { hint(&component.errors, Field::Nationality) }
            </div>

            <div class="form-item">
                <label>{"Date of birth "}</label>
                <input
                    type="date"
                    min={min_date.clone()}
                    max={format_input_date(Some(today()))}
                    value={format_input_date(form.date_of_birth)}
                    onchange={link.callback(|e: Event| Msg::Input(Field::DateOfBirth, input_value(&e)))}
                />
                { hint(&component.errors, Field::DateOfBirth) }
            </div>

            { text_input(component, link, Field::PassportNo, "text", "Passport Number", &form.passport_no) }

            <div class="form-item">
                <label>{"Passport expiry date "}</label>
                <input
                    type="date"
                    min={min_date}
                    value={format_input_date(form.passport_expiry_date)}
                    onchange={link.callback(|e: Event| Msg::Input(Field::PassportExpiryDate, input_value(&e)))}
                />
                { hint(&component.errors, Field::PassportExpiryDate) }
            </div>

            { file_input(component, link, DocumentKind::Passport, Field::Passport, "Passport") }
            { file_input(component, link, DocumentKind::Photo, Field::Photo, "Photo") }

            <button class="btn btn-default" type="submit" disabled={busy}>
                { if ctx.props().submitting { "Submitting..." } else { "Submit" } }
            </button>
        </form>
    }
}

fn text_input(
    component: &UserFormComponent,
    link: &Scope<UserFormComponent>,
    field: Field,
    input_type: &'static str,
    placeholder: &'static str,
    value: &str,
) -> Html {
    html! {
        <div class="form-item">
            <input
                type={input_type}
                placeholder={placeholder}
                value={value.to_string()}
                required=true
                oninput={link.callback(move |e: InputEvent| Msg::Input(field, input_value(&e)))}
            />
            { hint(&component.errors, field) }
        </div>
    }
}

fn file_input(
    component: &UserFormComponent,
    link: &Scope<UserFormComponent>,
    kind: DocumentKind,
    field: Field,
    placeholder: &'static str,
) -> Html {
    html! {
        <div class="form-item">
            <label>{ placeholder }</label>
            <input
                type="file"
                placeholder={placeholder}
                accept={kind.accept_attribute()}
                required=true
                onchange={link.callback(move |e: Event| Msg::ChooseFile(kind, chosen_file(&e)))}
            />
            { hint(&component.errors, field) }
        </div>
    }
}
