//! User-visible notices shown as toasts.
//!
//! Every failure shows the same message; the details go to the log.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notice {
    const fn success(title: &'static str, description: &'static str) -> Self {
        Self {
            kind: NoticeKind::Success,
            title,
            description,
        }
    }

    pub const fn failure() -> Self {
        Self {
            kind: NoticeKind::Failure,
            title: "Uh oh! Something went wrong.",
            description: "There was a problem with your request.",
        }
    }

    pub const fn user_added() -> Self {
        Self::success("User Added", "User Add Successfully")
    }

    pub const fn user_updated() -> Self {
        Self::success("User Update", "User Updated Successfully")
    }

    pub const fn user_deleted() -> Self {
        Self::success("User Delete", "User Deleted Successfully")
    }

    pub fn is_failure(&self) -> bool {
        self.kind == NoticeKind::Failure
    }
}
