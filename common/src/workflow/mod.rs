//! Request chains behind each operator action.
//!
//! Each function here is what one button press runs: it validates, talks to
//! [`UsersApi`](crate::api::UsersApi) in order, logs every step and returns a
//! detailed error. Components turn that error into [`Notice::failure`] with
//! [`report_failure`] and nothing else.

use log::error;
use std::fmt;

use crate::notice::Notice;

mod create;
mod directory;
mod edit;
mod file_reads;
mod refresh;

#[cfg(test)]
pub(crate) mod testing;

pub use create::{create_user, submit_new_user, CreateUserError, Rollback, RollbackPolicy};
pub use directory::{fetch_users, UserDirectory};
pub use edit::{delete_user, submit_contact, EditUserError};
pub use file_reads::FileReads;
pub use refresh::DialogRefresh;

/// Logs the detailed cause of a failed action and returns the generic notice.
pub fn report_failure(action: &str, cause: &dyn fmt::Display) -> Notice {
    error!("{action} failed: {cause}");
    Notice::failure()
}
