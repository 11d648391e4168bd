use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user as returned by `GET /api/users/`.
///
/// The client only mirrors what the backend holds: the list is replaced on
/// every fetch and nothing here is persisted locally. Dates are kept as the
/// strings the backend sent (`yyyy/MM/dd` when they were created by this
/// client) so that a record round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub mobile_no: String,
    pub email_id: String,
    pub nationality: String,
    pub date_of_birth: String,
    pub passport_no: String,
    pub passport_expiry_date: String,
    /// Server path of the passport document, present once its upload succeeded.
    #[serde(default)]
    pub passport: Option<String>,
    /// Server path of the photo, present once its upload succeeded.
    #[serde(default)]
    pub photo: Option<String>,
}

impl UserRecord {
    /// Whether both identity documents have been attached.
    pub fn has_documents(&self) -> bool {
        self.passport.is_some() && self.photo.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_payload() {
        let json = r#"{
            "id": 7,
            "name": "Amal Haddad",
            "mobileNo": "+971 50 123 4567",
            "emailId": "amal@example.com",
            "nationality": "AE",
            "dateOfBirth": "1990/04/12",
            "passportNo": "P1234567",
            "passportExpiryDate": "2031/01/30",
            "passport": "/uploads/7/passport.pdf",
            "photo": null
        }"#;

        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, UserId(7));
        assert_eq!(record.mobile_no, "+971 50 123 4567");
        assert_eq!(record.passport.as_deref(), Some("/uploads/7/passport.pdf"));
        assert!(record.photo.is_none());
        assert!(!record.has_documents());
    }

    #[test]
    fn missing_document_references_default_to_none() {
        let json = r#"{"id":1,"name":"Li","mobileNo":"+86 10 1234 5678","emailId":"li@example.com",
            "nationality":"CN","dateOfBirth":"1985/01/01","passportNo":"E1","passportExpiryDate":"2030/01/01"}"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert!(record.passport.is_none());
        assert!(record.photo.is_none());
    }
}
