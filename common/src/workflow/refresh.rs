/// Open state of a dialog plus the counter the user list watches.
///
/// Every open/close transition bumps the token, and so does every successful
/// save, even when the dialog was already dismissed while the save ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogRefresh {
    open: bool,
    token: u32,
}

impl DialogRefresh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn token(&self) -> u32 {
        self.token
    }

    /// Returns whether the dialog changed state.
    pub fn set_open(&mut self, open: bool) -> bool {
        if self.open == open {
            return false;
        }
        self.open = open;
        self.bump();
        true
    }

    /// Closes the dialog after a successful save and requests one refresh.
    pub fn saved(&mut self) {
        self.open = false;
        self.bump();
    }

    fn bump(&mut self) {
        self.token = self.token.wrapping_add(1);
    }
}
