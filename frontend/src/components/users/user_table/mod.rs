//! The user list with its per-row edit and delete actions.
//!
//! The list is fetched on first render, whenever the parent's `refresh_token`
//! changes, and whenever the edit dialog opens or closes. A fetch replaces the
//! whole list; a failed fetch keeps what was shown before.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::UserTableProps;
pub use state::UserTable;

impl Component for UserTable {
    type Message = Msg;
    type Properties = UserTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        UserTable::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().refresh_token != old_props.refresh_token {
            ctx.link().send_message(Msg::Fetch);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Fetch);
        }
    }
}
