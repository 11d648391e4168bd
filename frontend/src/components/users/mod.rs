//! User management screen: the create dialog, the table and its edit and
//! delete dialogs.

pub mod add_user;
mod fields;
pub mod update_user_form;
pub mod user_form;
pub mod user_table;
