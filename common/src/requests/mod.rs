//! JSON payloads exchanged with the users backend.

use crate::model::user::{UserId, UserRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date layout the backend expects in request bodies.
pub const WIRE_DATE_FORMAT: &str = "%Y/%m/%d";

pub fn format_wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}

/// Parses a date as sent by the backend. Accepts the wire layout and ISO dates.
pub fn parse_wire_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, WIRE_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}

/// Body of `POST /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub mobile_no: String,
    pub email_id: String,
    pub nationality: String,
    pub date_of_birth: String,
    pub passport_no: String,
    pub passport_expiry_date: String,
}

impl CreateUserRequest {
    /// Whether `record` carries exactly the fields that were submitted.
    pub fn matches(&self, record: &UserRecord) -> bool {
        self.name == record.name
            && self.mobile_no == record.mobile_no
            && self.email_id == record.email_id
            && self.nationality == record.nationality
            && self.date_of_birth == record.date_of_birth
            && self.passport_no == record.passport_no
            && self.passport_expiry_date == record.passport_expiry_date
    }
}

/// Response of `POST /api/users`. The backend may omit the id on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedUser {
    #[serde(default)]
    pub id: Option<UserId>,
}

/// Body of `PUT /api/users/{id}`: the only two fields an operator may change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    pub email_id: String,
    pub mobile_no: String,
}

impl UpdateContactRequest {
    pub fn apply_to(&self, record: &mut UserRecord) {
        record.email_id = self.email_id.clone();
        record.mobile_no = self.mobile_no.clone();
    }
}
