//! Create form: collects the nine inputs, validates them locally so that
//! messages show under each input, and hands the form to its parent only once
//! every rule passes.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::UserFormProps;
pub use state::UserFormComponent;

impl Component for UserFormComponent {
    type Message = Msg;
    type Properties = UserFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        UserFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
