//! The "Add User" button, its dialog, and the user table below it.
//!
//! Owns the create request chain: the form only validates, this component runs
//! `submit_new_user` and reports the outcome. Every open/close of the dialog
//! and every successful create bumps the refresh token the table watches.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::user::UserId;
use common::notice::Notice;
use common::validation::UserForm;
use common::workflow::{
    report_failure, submit_new_user, CreateUserError, DialogRefresh, RollbackPolicy,
};

use crate::api::HttpUsersApi;
use crate::components::toast::show_toast;
use crate::components::users::fields::today;

mod view;

pub enum Msg {
    SetOpen(bool),
    Submit(UserForm),
    Created(Result<UserId, CreateUserError>),
}

pub struct AddUser {
    pub dialog: DialogRefresh,
    pub submitting: bool,
}

impl Component for AddUser {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            dialog: DialogRefresh::new(),
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetOpen(open) => self.dialog.set_open(open),
            Msg::Submit(form) => {
                if self.submitting {
                    return false;
                }
                self.submitting = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let api = HttpUsersApi::default();
                    let result =
                        submit_new_user(&api, &form, today(), RollbackPolicy::default()).await;
                    link.send_message(Msg::Created(result));
                });
                true
            }
            Msg::Created(result) => {
                self.submitting = false;
                match result {
                    Ok(_) => {
                        self.dialog.saved();
                        show_toast(&Notice::user_added());
                    }
                    Err(err) => show_toast(&report_failure("adding user", &err)),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
