pub mod toast;
pub mod users;
