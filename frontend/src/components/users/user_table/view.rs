use yew::html::Scope;
use yew::prelude::*;

use common::model::country;
use common::model::user::UserRecord;

use super::messages::Msg;
use super::state::UserTable;
use crate::components::users::update_user_form::UpdateUserForm;
use crate::tops_sheet::top_sheet::TopSheet;

pub fn view(component: &UserTable, ctx: &Context<UserTable>) -> Html {
    let link = ctx.link();

    html! {
        <>
            <table class="user-table">
                <caption>{"A list of Users."}</caption>
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Name"}</th>
                        <th>{"Nationality"}</th>
                        <th>{"Phone"}</th>
                        <th>{"Email"}</th>
                        <th>{"Passport No"}</th>
                        <th>{"Date Of Birth"}</th>
                        <th>{"Passport Expiry Date"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for component.directory.records().iter().map(|record| row(record, link)) }
                </tbody>
            </table>
            { edit_dialog(component, link) }
            { delete_dialog(component, link) }
        </>
    }
}

fn row(record: &UserRecord, link: &Scope<UserTable>) -> Html {
    let id = record.id;
    html! {
        <tr key={id.to_string()}>
            <td>{ id.0 }</td>
            <td>{ record.name.clone() }</td>
            <td title={country::label_for(&record.nationality).to_string()}>{ record.nationality.clone() }</td>
            <td>{ record.mobile_no.clone() }</td>
            <td>{ record.email_id.clone() }</td>
            <td>{ record.passport_no.clone() }</td>
            <td>{ record.date_of_birth.clone() }</td>
            <td>{ record.passport_expiry_date.clone() }</td>
            <td>
                <div class="row-actions">
                    <button class="icon-btn" title="Edit" onclick={link.callback(move |_| Msg::SetEditing(Some(id)))}>
                        <i class="material-icons" style="color:blue;">{"edit_note"}</i>
                    </button>
                    <button class="icon-btn" title="Delete" onclick={link.callback(move |_| Msg::AskDelete(Some(id)))}>
                        <i class="material-icons" style="color:red;">{"delete_forever"}</i>
                    </button>
                </div>
            </td>
        </tr>
    }
}

fn edit_dialog(component: &UserTable, link: &Scope<UserTable>) -> Html {
    let Some(record) = component.editing.and_then(|id| component.directory.get(id)) else {
        return html! {};
    };
    let id = record.id;

    html! {
        <TopSheet
            open=true
            title={format!("Update User {}", record.name)}
            description={Some(format!("Update {}", record.name))}
            on_close={link.callback(|_| Msg::SetEditing(None))}
        >
            <UpdateUserForm
                record={record.clone()}
                saving={component.saving}
                on_submit={link.callback(move |form| Msg::SaveContact(id, form))}
            />
        </TopSheet>
    }
}

fn delete_dialog(component: &UserTable, link: &Scope<UserTable>) -> Html {
    html! {
        <TopSheet
            open={component.deleting.is_some()}
            title={"Are you absolutely sure?"}
            description={Some("This action cannot be undone. This will permanently delete the user and remove their data from the server.".to_string())}
            on_close={link.callback(|_| Msg::AskDelete(None))}
        >
            <div class="dialog-footer">
                <button class="btn btn-outline" onclick={link.callback(|_| Msg::AskDelete(None))}>
                    {"Cancel"}
                </button>
                <button class="btn btn-danger" onclick={link.callback(|_| Msg::ConfirmDelete)}>
                    {"Continue"}
                </button>
            </div>
        </TopSheet>
    }
}
