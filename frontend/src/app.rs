use crate::components::users::add_user::AddUser;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-root">
                <h1 class="page-title">{"Users"}</h1>
                <AddUser />
            </div>
        }
    }
}
