use common::model::user::UserId;
use common::workflow::UserDirectory;

pub struct UserTable {
    /// Records from the last successful fetch.
    pub directory: UserDirectory,
    /// Row whose edit dialog is open.
    pub editing: Option<UserId>,
    /// Row awaiting delete confirmation.
    pub deleting: Option<UserId>,
    /// A partial update is in flight.
    pub saving: bool,
}

impl UserTable {
    pub fn new() -> Self {
        Self {
            directory: UserDirectory::new(),
            editing: None,
            deleting: None,
            saving: false,
        }
    }
}
