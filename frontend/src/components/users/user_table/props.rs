use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UserTableProps {
    /// Any change makes the table fetch the list again.
    #[prop_or_default]
    pub refresh_token: u32,
}
