//! Modal sheet used for the create, edit and delete-confirmation dialogs.
//!
//! The sheet is fully controlled by its parent: it renders its children only
//! while `open` is set and reports close requests through `on_close`, so that
//! every open/closed transition goes through the parent's state.

use yew::{html, Callback, Children, Component, Context, Html, MouseEvent, Properties};

#[derive(Properties, PartialEq)]
pub struct TopSheetProps {
    pub open: bool,
    pub title: String,
    #[prop_or_default]
    pub description: Option<String>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

pub struct TopSheet;

impl Component for TopSheet {
    type Message = ();
    type Properties = TopSheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let on_close = props.on_close.reform(|_: MouseEvent| ());
        html! {
            <div class="top-sheet show">
                <div class="top-sheet-backdrop" onclick={on_close.clone()} />
                <div class="top-sheet-content" role="dialog" aria-modal="true">
                    <button class="top-sheet-close" title="Close" onclick={on_close}>
                        { "✕" }
                    </button>
                    <h2 class="top-sheet-title">{ props.title.clone() }</h2>
                    {
                        match &props.description {
                            Some(description) => html! { <p class="top-sheet-description">{ description.clone() }</p> },
                            None => html! {},
                        }
                    }
                    { for props.children.iter() }
                </div>
            </div>
        }
    }
}
