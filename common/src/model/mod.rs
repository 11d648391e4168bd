pub mod country;
pub mod document;
pub mod user;
