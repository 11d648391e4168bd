//! Shared model, validation and request orchestration for the user
//! administration client.
//!
//! Everything in this crate is independent of the browser: the frontend plugs
//! its HTTP implementation in through [`api::UsersApi`], and the workflows in
//! [`workflow`] drive that trait.

pub mod api;
pub mod model;
pub mod notice;
pub mod requests;
pub mod validation;
pub mod workflow;
