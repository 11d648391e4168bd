use crate::model::document::DocumentKind;
use crate::model::user::UserId;

/// Backend the client talks to unless `USERS_API_BASE_URL` was set at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8084";

const API_PATH: &str = "/api/users";

pub fn base_url() -> &'static str {
    option_env!("USERS_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Absolute URLs for every endpoint, rooted at one base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    base: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self::new(base_url())
    }
}

impl Routes {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn create(&self) -> String {
        format!("{}{}", self.base, API_PATH)
    }

    /// The backend lists users on the collection path with a trailing slash.
    pub fn list(&self) -> String {
        format!("{}{}/", self.base, API_PATH)
    }

    pub fn user(&self, id: UserId) -> String {
        format!("{}{}/{}", self.base, API_PATH, id)
    }

    pub fn upload(&self, id: UserId, kind: DocumentKind) -> String {
        format!("{}/{}", self.user(id), kind.route_suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_every_endpoint() {
        let routes = Routes::new("http://localhost:8084/");
        assert_eq!(routes.create(), "http://localhost:8084/api/users");
        assert_eq!(routes.list(), "http://localhost:8084/api/users/");
        assert_eq!(routes.user(UserId(3)), "http://localhost:8084/api/users/3");
        assert_eq!(
            routes.upload(UserId(3), DocumentKind::Passport),
            "http://localhost:8084/api/users/3/upload-passport"
        );
        assert_eq!(
            routes.upload(UserId(3), DocumentKind::Photo),
            "http://localhost:8084/api/users/3/upload-photo"
        );
    }
}
