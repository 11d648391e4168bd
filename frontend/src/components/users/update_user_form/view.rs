use yew::prelude::*;

use common::model::country;
use common::validation::Field;

use super::{Msg, UpdateUserForm};
use crate::components::users::fields::{hint, input_value};

pub fn view(component: &UpdateUserForm, ctx: &Context<UpdateUserForm>) -> Html {
    let link = ctx.link();
    let record = &ctx.props().record;
    let saving = ctx.props().saving;
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="user-form" {onsubmit} novalidate=true>
            { locked("Name", record.name.clone()) }

            <div class="form-item">
                <input
                    type="email"
                    placeholder="Email"
                    required=true
                    value={component.form.email.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::Input(Field::Email, input_value(&e)))}
                />
                { hint(&component.errors, Field::Email) }
            </div>

            <div class="form-item">
                <input
                    type="tel"
                    placeholder="Mobile number"
                    required=true
                    value={component.form.mobile_no.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::Input(Field::MobileNo, input_value(&e)))}
                />
                { hint(&component.errors, Field::MobileNo) }
            </div>

            <div class="form-item">
                <label>{"Nationality "}</label>
                <select disabled=true>
                    <option value={record.nationality.clone()} selected=true>
                        { country::label_for(&record.nationality).to_string() }
                    </option>
                </select>
            </div>

            { locked("Date of birth", record.date_of_birth.clone()) }
            { locked("Passport Number", record.passport_no.clone()) }
            { locked("Passport expiry date", record.passport_expiry_date.clone()) }

            <button class="btn btn-default" type="submit" disabled={saving}>
                { if saving { "Saving..." } else { "Submit" } }
            </button>
        </form>
    }
}

/// A read-only input showing the record's current value.
fn locked(label: &'static str, value: String) -> Html {
    html! {
        <div class="form-item">
            <label>{ label }</label>
            <input type="text" placeholder={label} value={value} disabled=true />
        </div>
    }
}
