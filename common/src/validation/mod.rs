//! Form schemas for the create and update dialogs.
//!
//! Validation runs before any request is issued; a form that fails here never
//! reaches the network. Messages are the ones shown under each input.

use crate::model::document::{Document, DocumentKind};
use crate::requests::{format_wire_date, CreateUserRequest, UpdateContactRequest};
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
        .expect("email pattern compiles")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[0-9 ()-]+$").expect("phone pattern compiles"));

const MIN_NAME_LEN: usize = 2;
const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

pub fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Form inputs the validation messages are attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    MobileNo,
    Email,
    Nationality,
    DateOfBirth,
    PassportNo,
    PassportExpiryDate,
    Passport,
    Photo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Every failed rule of a submission, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    fn push(&mut self, field: Field, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// First message for `field`, used to render the hint under the input.
    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<_> = self.0.iter().map(|e| e.message).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Raw state of the create form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub mobile_no: String,
    pub email: String,
    pub nationality: String,
    pub date_of_birth: Option<NaiveDate>,
    pub passport_no: String,
    pub passport_expiry_date: Option<NaiveDate>,
    pub passport: Option<Document>,
    pub photo: Option<Document>,
}

/// A create form that passed validation: the JSON body plus both files.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedUser {
    pub request: CreateUserRequest,
    pub passport: Document,
    pub photo: Document,
}

/// Raw state of the update form's editable inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub email: String,
    pub mobile_no: String,
}

impl UserForm {
    /// Checks every rule against `today` (the upper bound for the date of birth).
    pub fn validate(&self, today: NaiveDate) -> Result<ValidatedUser, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.name.trim().chars().count() < MIN_NAME_LEN {
            errors.push(Field::Name, "name must be at least 2 characters.");
        }
        check_mobile(&self.mobile_no, &mut errors);
        check_email(&self.email, &mut errors);

        let nationality = self.nationality.trim();
        if nationality.is_empty() {
            errors.push(Field::Nationality, "Nationality is required");
        } else if nationality.len() != 2 || !nationality.chars().all(|c| c.is_ascii_uppercase()) {
            errors.push(Field::Nationality, "Please select a valid country");
        }

        match self.date_of_birth {
            None => errors.push(Field::DateOfBirth, "Please select a date"),
            Some(date) if date < earliest_date() || date > today => errors.push(
                Field::DateOfBirth,
                "Date of birth must be between 1900-01-01 and today",
            ),
            Some(_) => {}
        }

        if self.passport_no.trim().is_empty() {
            errors.push(Field::PassportNo, "Please enter passport number");
        }

        match self.passport_expiry_date {
            None => errors.push(Field::PassportExpiryDate, "Please select a date"),
            Some(date) if date < earliest_date() => errors.push(
                Field::PassportExpiryDate,
                "Passport expiry date must not be before 1900-01-01",
            ),
            Some(_) => {}
        }

        if !document_ok(self.passport.as_ref(), DocumentKind::Passport) {
            errors.push(Field::Passport, "Please attach the passport as a PDF");
        }
        if !document_ok(self.photo.as_ref(), DocumentKind::Photo) {
            errors.push(Field::Photo, "Please attach a JPG or PNG photo");
        }

        match (
            self.date_of_birth,
            self.passport_expiry_date,
            &self.passport,
            &self.photo,
        ) {
            (Some(dob), Some(expiry), Some(passport), Some(photo)) if errors.is_empty() => {
                Ok(ValidatedUser {
                    request: CreateUserRequest {
                        name: self.name.trim().to_string(),
                        mobile_no: self.mobile_no.trim().to_string(),
                        email_id: self.email.trim().to_string(),
                        nationality: nationality.to_string(),
                        date_of_birth: format_wire_date(dob),
                        passport_no: self.passport_no.trim().to_string(),
                        passport_expiry_date: format_wire_date(expiry),
                    },
                    passport: passport.clone(),
                    photo: photo.clone(),
                })
            }
            _ => Err(errors),
        }
    }
}

impl ContactForm {
    /// Only the editable fields are checked; the disabled ones are never sent.
    pub fn validate(&self) -> Result<UpdateContactRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_email(&self.email, &mut errors);
        check_mobile(&self.mobile_no, &mut errors);
        errors.into_result(UpdateContactRequest {
            email_id: self.email.trim().to_string(),
            mobile_no: self.mobile_no.trim().to_string(),
        })
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    if !PHONE_RE.is_match(value) {
        return false;
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
}

fn check_email(value: &str, errors: &mut ValidationErrors) {
    if !is_valid_email(value) {
        errors.push(Field::Email, "Please enter valid email");
    }
}

fn check_mobile(value: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.push(Field::MobileNo, "Phone number is required");
    } else if !is_valid_phone(value) {
        errors.push(Field::MobileNo, "Please enter valid phone number");
    }
}

fn document_ok(document: Option<&Document>, kind: DocumentKind) -> bool {
    document.is_some_and(|doc| !doc.is_empty() && kind.accepts(doc))
}
