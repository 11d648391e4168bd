use yew::prelude::*;

use super::{AddUser, Msg};
use crate::components::users::user_form::UserFormComponent;
use crate::components::users::user_table::UserTable;
use crate::tops_sheet::top_sheet::TopSheet;

pub fn view(component: &AddUser, ctx: &Context<AddUser>) -> Html {
    let link = ctx.link();

    html! {
        <>
            <button class="btn btn-outline" onclick={link.callback(|_| Msg::SetOpen(true))}>
                {"Add User"}
            </button>

            <TopSheet
                open={component.dialog.is_open()}
                title={"Add User"}
                description={Some("Add new User.".to_string())}
                on_close={link.callback(|_| Msg::SetOpen(false))}
            >
                <UserFormComponent
                    on_submit={link.callback(Msg::Submit)}
                    submitting={component.submitting}
                />
            </TopSheet>

            <UserTable refresh_token={component.dialog.token()} />
        </>
    }
}
