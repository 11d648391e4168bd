use yew::platform::spawn_local;
use yew::prelude::*;

use common::notice::Notice;
use common::workflow::{delete_user, fetch_users, report_failure, submit_contact};

use super::messages::Msg;
use super::state::UserTable;
use crate::api::HttpUsersApi;
use crate::components::toast::show_toast;

pub fn update(component: &mut UserTable, ctx: &Context<UserTable>, msg: Msg) -> bool {
    match msg {
        Msg::Fetch => {
            let link = ctx.link().clone();
            spawn_local(async move {
                let api = HttpUsersApi::default();
                link.send_message(Msg::Fetched(fetch_users(&api).await));
            });
            false
        }
        Msg::Fetched(result) => match component.directory.apply_fetch(result) {
            Some(notice) => {
                show_toast(&notice);
                false
            }
            None => {
                component.editing = component.directory.retain_selection(component.editing);
                component.deleting = component.directory.retain_selection(component.deleting);
                true
            }
        },
        Msg::SetEditing(editing) => {
            if component.editing == editing {
                return false;
            }
            component.editing = editing;
            ctx.link().send_message(Msg::Fetch);
            true
        }
        Msg::SaveContact(id, form) => {
            if component.saving {
                return false;
            }
            component.saving = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let api = HttpUsersApi::default();
                let result = submit_contact(&api, id, &form).await;
                link.send_message(Msg::ContactSaved(id, result));
            });
            true
        }
        Msg::ContactSaved(id, result) => {
            component.saving = false;
            match result {
                Ok(contact) => {
                    component.directory.apply_contact(id, &contact);
                    ctx.link().send_message(Msg::SetEditing(None));
                    show_toast(&Notice::user_updated());
                }
                Err(err) => show_toast(&report_failure("updating user", &err)),
            }
            true
        }
        Msg::AskDelete(deleting) => {
            component.deleting = deleting;
            true
        }
        Msg::ConfirmDelete => {
            let Some(id) = component.deleting.take() else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let api = HttpUsersApi::default();
                link.send_message(Msg::Deleted(id, delete_user(&api, id).await));
            });
            true
        }
        Msg::Deleted(id, Ok(())) => {
            component.directory.remove(id);
            show_toast(&Notice::user_deleted());
            true
        }
        Msg::Deleted(_, Err(err)) => {
            show_toast(&report_failure("deleting user", &err));
            false
        }
    }
}
